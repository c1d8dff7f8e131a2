//! Session operations built on [`ClientFactory::resolve`]: QR login, authorization check,
//! sending and listing messages.

use tgs_core::MessageView;
use tracing::info;

use crate::error::{Result, SessionError};
use crate::factory::ClientFactory;

/// Default number of messages returned by [`SessionService::list_messages`].
pub const DEFAULT_MESSAGE_LIMIT: usize = 50;

#[derive(Clone)]
pub struct SessionService {
    factory: ClientFactory,
}

impl SessionService {
    pub fn new(factory: ClientFactory) -> Self {
        Self { factory }
    }

    /// Starts a QR login for the account behind `phone` and returns the URL to render.
    ///
    /// The session token is stored right after the handshake starts, before the user scans.
    /// Call [`Self::confirm_qr_login`] once the scan is done to store the authorized state.
    pub async fn begin_qr_login(&self, phone: &str) -> Result<String> {
        let resolved = self.factory.resolve(phone).await?;
        let account = resolved
            .account
            .ok_or_else(|| SessionError::AccountNotFound(phone.to_string()))?;

        let login = resolved.client.qr_login().await?;

        let token = resolved.client.save_session();
        self.factory.sessions().save_token(account.id, &token).await?;

        info!("QR login started for account {}", account.id);
        Ok(login.url)
    }

    /// Re-saves the session of an account once it is authorized. Returns the authorization status.
    pub async fn confirm_qr_login(&self, phone: &str) -> Result<bool> {
        let resolved = self.factory.resolve(phone).await?;
        let account = resolved
            .account
            .ok_or_else(|| SessionError::AccountNotFound(phone.to_string()))?;

        if !resolved.client.is_authorized().await? {
            return Ok(false);
        }

        let token = resolved.client.save_session();
        self.factory.sessions().save_token(account.id, &token).await?;

        info!("QR login confirmed for account {}", account.id);
        Ok(true)
    }

    /// Whether the stored session for `phone` is authorized. Unknown phones are never authorized.
    pub async fn is_logged_in(&self, phone: &str) -> Result<bool> {
        let resolved = self.factory.resolve(phone).await?;
        Ok(resolved.client.is_authorized().await?)
    }

    pub async fn send_message(&self, phone: &str, recipient: &str, text: &str) -> Result<()> {
        let resolved = self.factory.resolve(phone).await?;
        resolved.client.send_message(recipient, text).await?;
        info!("Sent message from {} to {}", phone, recipient);
        Ok(())
    }

    /// Up to `limit` recent messages with `peer`, in the order the transport returns them.
    pub async fn list_messages(
        &self,
        phone: &str,
        peer: &str,
        limit: usize,
    ) -> Result<Vec<MessageView>> {
        let resolved = self.factory.resolve(phone).await?;
        let messages = resolved.client.get_messages(peer, limit).await?;

        Ok(messages
            .into_iter()
            .take(limit)
            .map(MessageView::from)
            .collect())
    }
}
