//! # tgs-cli
//!
//! Admin CLI for the Telegram session store: argument parsing, config loading, command handlers.

pub mod cli;
pub mod commands;

pub use cli::{load_config, AccountCommands, Cli, Commands, SessionCommands};
pub use commands::Admin;
pub use tg_sessions::AppConfig;
