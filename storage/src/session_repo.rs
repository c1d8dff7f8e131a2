//! Session repository: persistence and queries for per-account client sessions.
//!
//! Uses SqlitePoolManager and the models (SessionRecord, SessionOverview, SessionQuery).
//! Writes are single-row upserts keyed by `account_id`, so concurrent writers end with last-write-wins.

use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, info};

use crate::error::StorageError;
use crate::models::{SessionOverview, SessionQuery, SessionRecord};
use crate::repository::SessionStore;
use crate::sqlite_pool::SqlitePoolManager;

#[derive(Clone)]
pub struct SessionRepository {
    pool_manager: SqlitePoolManager,
}

impl SessionRepository {
    pub fn new(pool_manager: SqlitePoolManager) -> Self {
        Self { pool_manager }
    }

    async fn fetch_by_owner(&self, account_id: i64) -> Result<SessionRecord, StorageError> {
        let record = sqlx::query_as::<_, SessionRecord>(
            "SELECT * FROM tg_sessions WHERE account_id = ?",
        )
        .bind(account_id)
        .fetch_one(self.pool_manager.pool())
        .await?;

        Ok(record)
    }

    /// Toggles the active flag. Fails with `NotFound` if the account has no session record.
    pub async fn set_active(
        &self,
        account_id: i64,
        active: bool,
    ) -> Result<SessionRecord, StorageError> {
        let result =
            sqlx::query("UPDATE tg_sessions SET is_active = ?, updated_at = ? WHERE account_id = ?")
                .bind(active)
                .bind(Utc::now())
                .bind(account_id)
                .execute(self.pool_manager.pool())
                .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound(format!(
                "session for account {}",
                account_id
            )));
        }

        info!("Session for account {} set active={}", account_id, active);
        self.fetch_by_owner(account_id).await
    }

    /// Lists sessions with their owners, most recently updated first.
    pub async fn list(&self, query: &SessionQuery) -> Result<Vec<SessionOverview>, StorageError> {
        let mut sql = String::from(
            r#"
            SELECT s.id, s.account_id, a.phone, a.username, s.token, s.is_active, s.created_at, s.updated_at
            FROM tg_sessions s
            JOIN accounts a ON a.id = s.account_id
            WHERE 1=1
            "#,
        );

        if query.active.is_some() {
            sql.push_str(" AND s.is_active = ?");
        }
        if query.search.is_some() {
            sql.push_str(r" AND (a.username LIKE ? ESCAPE '\' OR a.phone LIKE ? ESCAPE '\')");
        }

        sql.push_str(" ORDER BY s.updated_at DESC");

        if query.limit.is_some() {
            sql.push_str(" LIMIT ?");
        }

        let mut query_builder = sqlx::query_as::<_, SessionOverview>(&sql);
        if let Some(active) = query.active {
            query_builder = query_builder.bind(active);
        }
        if let Some(search) = &query.search {
            let pattern = format!("%{}%", escape_like(search));
            query_builder = query_builder.bind(pattern.clone()).bind(pattern);
        }
        if let Some(limit) = query.limit {
            query_builder = query_builder.bind(limit);
        }

        let sessions = query_builder.fetch_all(self.pool_manager.pool()).await?;
        info!("Retrieved {} sessions", sessions.len());

        Ok(sessions)
    }
}

#[async_trait]
impl SessionStore for SessionRepository {
    async fn get_or_create(&self, account_id: i64) -> Result<SessionRecord, StorageError> {
        let now = Utc::now();

        let result = sqlx::query(
            r#"
            INSERT INTO tg_sessions (account_id, token, is_active, created_at, updated_at)
            VALUES (?, '', 1, ?, ?)
            ON CONFLICT(account_id) DO NOTHING
            "#,
        )
        .bind(account_id)
        .bind(now)
        .bind(now)
        .execute(self.pool_manager.pool())
        .await?;

        if result.rows_affected() > 0 {
            info!("Created empty session record for account {}", account_id);
        }

        self.fetch_by_owner(account_id).await
    }

    async fn find_by_owner(&self, account_id: i64) -> Result<Option<SessionRecord>, StorageError> {
        let record = sqlx::query_as::<_, SessionRecord>(
            "SELECT * FROM tg_sessions WHERE account_id = ?",
        )
        .bind(account_id)
        .fetch_optional(self.pool_manager.pool())
        .await?;

        Ok(record)
    }

    async fn save_token(&self, account_id: i64, token: &str) -> Result<SessionRecord, StorageError> {
        let now = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO tg_sessions (account_id, token, is_active, created_at, updated_at)
            VALUES (?, ?, 1, ?, ?)
            ON CONFLICT(account_id) DO UPDATE SET token = excluded.token, updated_at = excluded.updated_at
            "#,
        )
        .bind(account_id)
        .bind(token)
        .bind(now)
        .bind(now)
        .execute(self.pool_manager.pool())
        .await?;

        debug!("Saved session token for account {} ({} bytes)", account_id, token.len());
        self.fetch_by_owner(account_id).await
    }
}

/// Escapes LIKE metacharacters so `search` matches literally (used with `ESCAPE '\'`).
pub(crate) fn escape_like(search: &str) -> String {
    let mut escaped = String::with_capacity(search.len());
    for c in search.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
