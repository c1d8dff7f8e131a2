//! CLI parser and config loading.

use clap::{Parser, Subcommand};
use tg_sessions::AppConfig;

#[derive(Parser, Debug)]
#[command(name = "tgs")]
#[command(about = "Telegram session admin: accounts and stored client sessions", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage the account directory.
    Accounts {
        #[command(subcommand)]
        command: AccountCommands,
    },
    /// Inspect and toggle stored client sessions.
    Sessions {
        #[command(subcommand)]
        command: SessionCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum AccountCommands {
    /// Add an account.
    Add {
        #[arg(long)]
        phone: String,
        #[arg(long)]
        username: String,
    },
    /// Remove an account and its session.
    Remove { phone: String },
}

#[derive(Subcommand, Debug)]
pub enum SessionCommands {
    /// List sessions, most recently updated first.
    List {
        #[arg(long)]
        active: Option<bool>,
        /// Substring of the owner's username or phone.
        #[arg(short, long)]
        search: Option<String>,
        #[arg(short, long)]
        limit: Option<i64>,
        #[arg(long)]
        json: bool,
    },
    /// Show the session of one account.
    Show { phone: String },
    /// Mark the session of an account active.
    Activate { phone: String },
    /// Mark the session of an account inactive.
    Deactivate { phone: String },
}

/// Loads DATABASE_URL and LOG_FILE (`.env` must already be loaded). The admin commands never open
/// Telegram clients, so TELEGRAM_API_ID/HASH are not read.
pub fn load_config() -> AppConfig {
    AppConfig::storage_from_env()
}
