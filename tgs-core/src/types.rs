//! Core types: message sender, raw transport message, projected message view, QR login ticket.

use serde::{Deserialize, Serialize};

/// Author of a message as reported by the transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sender {
    pub id: i64,
    pub username: Option<String>,
}

/// A message exactly as returned by [`crate::MessagingClient::get_messages`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawMessage {
    /// `None` for service messages and channel posts without an author.
    pub sender: Option<Sender>,
    /// True when the message was sent by the session's own account.
    pub outgoing: bool,
    pub text: String,
}

/// Projection of a [`RawMessage`] handed to API callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageView {
    pub sender_username: Option<String>,
    pub is_outgoing: bool,
    pub text: String,
}

impl From<RawMessage> for MessageView {
    fn from(message: RawMessage) -> Self {
        Self {
            sender_username: message.sender.and_then(|s| s.username),
            is_outgoing: message.outgoing,
            text: message.text,
        }
    }
}

/// Result of starting a QR login handshake: the URL to render as a QR code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QrLogin {
    pub url: String,
}
