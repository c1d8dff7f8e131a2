//! # tgs-core
//!
//! Core types and traits for the Telegram session manager: the [`MessagingClient`] /
//! [`ClientConnector`] capability, [`ApiCredentials`], message types, and tracing initialization.
//! Transport-agnostic; used by storage consumers, tg-sessions and tgs-cli.

pub mod client;
pub mod error;
pub mod logger;
pub mod types;

pub use client::{ApiCredentials, ClientConnector, MessagingClient};
pub use error::{ClientError, Result};
pub use logger::init_tracing;
pub use types::{MessageView, QrLogin, RawMessage, Sender};
