use thiserror::Error;

/// Failures reported by a [`crate::MessagingClient`] or its connector.
///
/// These come from the network/protocol layer and are passed through to callers unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Peer not found: {0}")]
    PeerNotFound(String),

    #[error("Request failed: {0}")]
    Request(String),
}

pub type Result<T> = std::result::Result<T, ClientError>;
