//! Client factory: phone number to connected client handle.
//!
//! Every call looks up the account, reads (or lazily creates) its session record and opens a new
//! connection. Nothing is cached between calls.

use std::sync::Arc;

use storage::{Account, AccountDirectory, SessionStore};
use tgs_core::{ApiCredentials, ClientConnector, MessagingClient};
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::error::Result;

/// A connected client and the account it belongs to (`None` for an anonymous session).
pub struct ResolvedClient {
    pub client: Box<dyn MessagingClient>,
    pub account: Option<Account>,
}

#[derive(Clone)]
pub struct ClientFactory {
    accounts: Arc<dyn AccountDirectory>,
    sessions: Arc<dyn SessionStore>,
    connector: Arc<dyn ClientConnector>,
    credentials: ApiCredentials,
}

impl ClientFactory {
    pub fn new(
        accounts: Arc<dyn AccountDirectory>,
        sessions: Arc<dyn SessionStore>,
        connector: Arc<dyn ClientConnector>,
        credentials: ApiCredentials,
    ) -> Self {
        Self {
            accounts,
            sessions,
            connector,
            credentials,
        }
    }

    /// Builds a factory with the API credentials from `config`. Fails with a config error if
    /// TELEGRAM_API_ID / TELEGRAM_API_HASH were not set.
    pub fn from_config(
        config: &AppConfig,
        accounts: Arc<dyn AccountDirectory>,
        sessions: Arc<dyn SessionStore>,
        connector: Arc<dyn ClientConnector>,
    ) -> Result<Self> {
        let credentials = config.require_api()?.clone();
        Ok(Self::new(accounts, sessions, connector, credentials))
    }

    pub fn sessions(&self) -> &Arc<dyn SessionStore> {
        &self.sessions
    }

    /// Connects a client for `phone`.
    ///
    /// A known account gets a client initialized from its stored token (an empty record is created
    /// on first use). An unknown phone gets an anonymous client and `account == None`.
    pub async fn resolve(&self, phone: &str) -> Result<ResolvedClient> {
        match self.accounts.find_by_phone(phone).await? {
            Some(account) => {
                let record = self.sessions.get_or_create(account.id).await?;
                debug!(
                    "Resolved account {} for {} (stored session: {})",
                    account.id,
                    phone,
                    !record.is_empty()
                );
                let client = self.connector.connect(&self.credentials, &record.token).await?;
                info!("Connected client for account {}", account.id);
                Ok(ResolvedClient {
                    client,
                    account: Some(account),
                })
            }
            None => {
                debug!("No account for {}, using anonymous session", phone);
                let client = self.connector.connect(&self.credentials, "").await?;
                Ok(ResolvedClient {
                    client,
                    account: None,
                })
            }
        }
    }
}
