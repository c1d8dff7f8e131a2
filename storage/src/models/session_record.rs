//! Session record model for persistence.
//!
//! Maps to the `tg_sessions` table; one row per account.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct SessionRecord {
    pub id: i64,
    pub account_id: i64,
    /// Serialized client session. Empty until a login flow stores one.
    pub token: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SessionRecord {
    /// True when no client session has been stored yet.
    pub fn is_empty(&self) -> bool {
        self.token.is_empty()
    }
}
