//! Storage crate: account directory and client session persistence.
//!
//! ## Modules
//!
//! - [`error`] – Storage error types
//! - [`models`] – Account, SessionRecord, SessionOverview, SessionQuery
//! - [`repository`] – AccountDirectory and SessionStore traits
//! - [`account_repo`] – AccountRepository (SQLite)
//! - [`session_repo`] – SessionRepository (SQLite)
//! - [`sqlite_pool`] – SqlitePoolManager

mod account_repo;
mod error;
mod models;
mod repository;
mod session_repo;
mod sqlite_pool;


pub use account_repo::AccountRepository;
pub use error::StorageError;
pub use models::{Account, SessionOverview, SessionQuery, SessionRecord};
pub use repository::{AccountDirectory, SessionStore};
pub use session_repo::SessionRepository;
pub use sqlite_pool::SqlitePoolManager;
