//! Session joined with its owner, for listings.
//!
//! Returned by SessionRepository::list.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct SessionOverview {
    pub id: i64,
    pub account_id: i64,
    pub phone: String,
    pub username: String,
    pub token: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl fmt::Display for SessionOverview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Session for user {}", self.username)
    }
}
