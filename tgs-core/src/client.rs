//! Messaging client capability.
//!
//! [`MessagingClient`] is one connected session; [`ClientConnector`] opens one from a stored token.
//! Both are transport-agnostic: an embedding service implements them over a concrete Telegram
//! client library, tests substitute an in-memory implementation.

use std::fmt;

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{QrLogin, RawMessage};

/// Application credentials issued by Telegram (api_id / api_hash).
#[derive(Clone, PartialEq, Eq)]
pub struct ApiCredentials {
    pub api_id: i32,
    pub api_hash: String,
}

impl ApiCredentials {
    pub fn new(api_id: i32, api_hash: impl Into<String>) -> Self {
        Self {
            api_id,
            api_hash: api_hash.into(),
        }
    }
}

impl fmt::Debug for ApiCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiCredentials")
            .field("api_id", &self.api_id)
            .field("api_hash", &"<redacted>")
            .finish()
    }
}

/// A live, connected client session.
#[async_trait]
pub trait MessagingClient: Send + Sync {
    /// Starts a QR login handshake and returns the URL to be scanned by an authorized app.
    async fn qr_login(&self) -> Result<QrLogin>;
    /// Whether the session is bound to an authorized account.
    async fn is_authorized(&self) -> Result<bool>;
    /// Sends `text` to `peer` (username, phone or id as understood by the transport).
    async fn send_message(&self, peer: &str, text: &str) -> Result<()>;
    /// Fetches up to `limit` most recent messages exchanged with `peer`, in transport order.
    async fn get_messages(&self, peer: &str, limit: usize) -> Result<Vec<RawMessage>>;
    /// Serializes the current session state into an opaque token.
    fn save_session(&self) -> String;
}

/// Opens client sessions.
#[async_trait]
pub trait ClientConnector: Send + Sync {
    /// Connects a client initialized from `token`. An empty token starts a new, unauthenticated session.
    async fn connect(
        &self,
        credentials: &ApiCredentials,
        token: &str,
    ) -> Result<Box<dyn MessagingClient>>;
}
