use storage::StorageError;
use tgs_core::ClientError;
use thiserror::Error;

/// Errors surfaced by [`crate::ClientFactory`] and [`crate::SessionService`].
///
/// Transport and persistence failures are wrapped as-is; no retries or translation happen here.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Account not found for phone {0}")]
    AccountNotFound(String),

    #[error("Transport error: {0}")]
    Transport(#[from] ClientError),

    #[error("Persistence error: {0}")]
    Persistence(#[from] StorageError),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, SessionError>;
