//! Filter parameters for listing sessions.
//!
//! Used by SessionRepository::list.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionQuery {
    pub active: Option<bool>,
    /// Substring matched against the owner's username or phone.
    pub search: Option<String>,
    pub limit: Option<i64>,
}
