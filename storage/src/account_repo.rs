//! Account repository: the account directory backed by the `accounts` table.

use async_trait::async_trait;
use chrono::Utc;
use tracing::info;

use crate::error::StorageError;
use crate::models::Account;
use crate::repository::AccountDirectory;
use crate::sqlite_pool::SqlitePoolManager;

#[derive(Clone)]
pub struct AccountRepository {
    pool_manager: SqlitePoolManager,
}

impl AccountRepository {
    pub fn new(pool_manager: SqlitePoolManager) -> Self {
        Self { pool_manager }
    }

    /// Inserts a new account. Fails with `AlreadyExists` if the phone is taken.
    pub async fn create(&self, phone: &str, username: &str) -> Result<Account, StorageError> {
        let pool = self.pool_manager.pool();
        let created_at = Utc::now();

        let result = sqlx::query("INSERT INTO accounts (phone, username, created_at) VALUES (?, ?, ?)")
            .bind(phone)
            .bind(username)
            .bind(created_at)
            .execute(pool)
            .await?;

        info!("Created account: phone={}, username={}", phone, username);

        Ok(Account {
            id: result.last_insert_rowid(),
            phone: phone.to_string(),
            username: username.to_string(),
            created_at,
        })
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Account>, StorageError> {
        let account = sqlx::query_as::<_, Account>("SELECT * FROM accounts WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool_manager.pool())
            .await?;

        Ok(account)
    }

    /// Deletes the account and, through the foreign key, its session record.
    pub async fn delete(&self, id: i64) -> Result<bool, StorageError> {
        let result = sqlx::query("DELETE FROM accounts WHERE id = ?")
            .bind(id)
            .execute(self.pool_manager.pool())
            .await?;

        info!("Deleted account id={} (rows={})", id, result.rows_affected());
        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl AccountDirectory for AccountRepository {
    async fn find_by_phone(&self, phone: &str) -> Result<Option<Account>, StorageError> {
        let account = sqlx::query_as::<_, Account>("SELECT * FROM accounts WHERE phone = ?")
            .bind(phone)
            .fetch_optional(self.pool_manager.pool())
            .await?;

        Ok(account)
    }
}
