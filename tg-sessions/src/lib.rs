//! # tg-sessions
//!
//! Session lifecycle for per-account Telegram clients: [`ClientFactory`] resolves a phone number to
//! a connected client bound to its stored session, [`SessionService`] runs QR login, authorization
//! checks and messaging on top of it. The protocol itself is behind [`tgs_core::ClientConnector`].

mod config;
mod error;
mod factory;
mod service;

pub use config::{AppConfig, DEFAULT_DATABASE_URL, DEFAULT_LOG_FILE};
pub use error::{Result, SessionError};
pub use factory::{ClientFactory, ResolvedClient};
pub use service::{SessionService, DEFAULT_MESSAGE_LIMIT};
