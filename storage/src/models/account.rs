//! Account model: a directory entry identified by phone number.
//!
//! Maps to the `accounts` table and is returned by AccountRepository.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Account {
    pub id: i64,
    pub phone: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
}
