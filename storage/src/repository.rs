//! Storage seams consumed by the client factory and session operations.

use async_trait::async_trait;

use crate::error::StorageError;
use crate::models::{Account, SessionRecord};

/// Maps a phone number to an account.
#[async_trait]
pub trait AccountDirectory: Send + Sync {
    async fn find_by_phone(&self, phone: &str) -> Result<Option<Account>, StorageError>;
}

/// One session record per account, keyed by the owner's id.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Returns the owner's record, inserting one with an empty token if there is none.
    async fn get_or_create(&self, account_id: i64) -> Result<SessionRecord, StorageError>;
    async fn find_by_owner(&self, account_id: i64) -> Result<Option<SessionRecord>, StorageError>;
    /// Upserts the owner's token and bumps `updated_at`.
    async fn save_token(&self, account_id: i64, token: &str) -> Result<SessionRecord, StorageError>;
}
