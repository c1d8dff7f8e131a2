//! Application configuration: Telegram API credentials, database URL, log path.
//! Loaded from TELEGRAM_API_ID, TELEGRAM_API_HASH, DATABASE_URL and LOG_FILE.

use std::env;

use tgs_core::ApiCredentials;

use crate::error::{Result, SessionError};

pub const DEFAULT_DATABASE_URL: &str = "sqlite:./tg_sessions.db";
pub const DEFAULT_LOG_FILE: &str = "logs/tg-sessions.log";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub log_file: String,
    /// `None` when neither TELEGRAM_API_ID nor TELEGRAM_API_HASH is set (storage-only tools).
    pub api: Option<ApiCredentials>,
}

impl AppConfig {
    /// Loads from the environment. The API id and hash must be set together; the id must be numeric.
    pub fn from_env() -> Result<Self> {
        let api = api_from_env()?;
        Ok(Self {
            api,
            ..Self::storage_from_env()
        })
    }

    /// Loads only DATABASE_URL and LOG_FILE, leaving `api` unset. For tools that never open clients.
    pub fn storage_from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            log_file: env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string()),
            api: None,
        }
    }

    /// Builds a config with the given credentials and default paths.
    pub fn with_credentials(api: ApiCredentials) -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            log_file: DEFAULT_LOG_FILE.to_string(),
            api: Some(api),
        }
    }

    /// Credentials needed to open client sessions.
    pub fn require_api(&self) -> Result<&ApiCredentials> {
        self.api.as_ref().ok_or_else(|| {
            SessionError::Config("TELEGRAM_API_ID and TELEGRAM_API_HASH must be set".to_string())
        })
    }
}

fn api_from_env() -> Result<Option<ApiCredentials>> {
    match (env::var("TELEGRAM_API_ID").ok(), env::var("TELEGRAM_API_HASH").ok()) {
        (Some(id), Some(hash)) => {
            let api_id = id.trim().parse::<i32>().map_err(|_| {
                SessionError::Config(format!("TELEGRAM_API_ID is not a number: {}", id))
            })?;
            if hash.trim().is_empty() {
                return Err(SessionError::Config("TELEGRAM_API_HASH is empty".to_string()));
            }
            Ok(Some(ApiCredentials::new(api_id, hash.trim())))
        }
        (None, None) => Ok(None),
        (Some(_), None) => Err(SessionError::Config("TELEGRAM_API_HASH not set".to_string())),
        (None, Some(_)) => Err(SessionError::Config("TELEGRAM_API_ID not set".to_string())),
    }
}
