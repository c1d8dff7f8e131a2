//! tgs CLI: manage accounts and stored Telegram client sessions. Config from env and `.env`.

use anyhow::Result;
use clap::Parser;
use tgs_cli::{load_config, Admin, Cli};
use tgs_core::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = load_config();
    init_tracing(&config.log_file)?;

    let admin = Admin::connect(&config.database_url).await?;
    let mut stdout = std::io::stdout();
    admin.run(cli.command, &mut stdout).await
}
