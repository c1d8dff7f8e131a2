//! In-memory `ClientConnector` used by the tg-sessions integration tests.
//!
//! - Tokens are plain strings; an empty token is an unauthenticated new session.
//! - `qr_login` on an empty session mints a fresh token, as a real client creates its auth key.
//! - A session is authorized once a test calls `authorize(token)` (the simulated QR scan).
//! - Every connect, send and fetch is recorded so tests can assert on them.
//! - `ignore_limit` simulates a transport that returns more history than asked for.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use storage::{AccountRepository, SessionRepository, SqlitePoolManager};
use tg_sessions::{ClientFactory, SessionService};
use tgs_core::{
    ApiCredentials, ClientConnector, ClientError, MessagingClient, QrLogin, RawMessage, Sender,
};

#[derive(Default)]
struct MockState {
    authorized: HashSet<String>,
    history: HashMap<String, Vec<RawMessage>>,
    connected_tokens: Vec<String>,
    sent: Vec<(String, String, String)>,
    minted: usize,
    fail_connect: bool,
    ignore_limit: bool,
}

#[derive(Clone, Default)]
pub struct MockConnector {
    state: Arc<Mutex<MockState>>,
}

impl MockConnector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `token` as bound to an authorized account.
    pub fn authorize(&self, token: &str) {
        self.state.lock().unwrap().authorized.insert(token.to_string());
    }

    pub fn set_history(&self, peer: &str, messages: Vec<RawMessage>) {
        self.state
            .lock()
            .unwrap()
            .history
            .insert(peer.to_string(), messages);
    }

    pub fn fail_connections(&self) {
        self.state.lock().unwrap().fail_connect = true;
    }

    /// Makes `get_messages` return the whole history regardless of `limit`.
    pub fn ignore_limit(&self) {
        self.state.lock().unwrap().ignore_limit = true;
    }

    /// Tokens passed to `connect`, in call order.
    pub fn connected_tokens(&self) -> Vec<String> {
        self.state.lock().unwrap().connected_tokens.clone()
    }

    /// `(token, peer, text)` for every message sent.
    pub fn sent(&self) -> Vec<(String, String, String)> {
        self.state.lock().unwrap().sent.clone()
    }
}

#[async_trait]
impl ClientConnector for MockConnector {
    async fn connect(
        &self,
        credentials: &ApiCredentials,
        token: &str,
    ) -> tgs_core::Result<Box<dyn MessagingClient>> {
        let mut state = self.state.lock().unwrap();
        if state.fail_connect {
            return Err(ClientError::Connection("network unreachable".to_string()));
        }
        if credentials.api_hash.is_empty() {
            return Err(ClientError::Connection("invalid api credentials".to_string()));
        }
        state.connected_tokens.push(token.to_string());

        Ok(Box::new(MockClient {
            token: Mutex::new(token.to_string()),
            state: self.state.clone(),
        }))
    }
}

struct MockClient {
    token: Mutex<String>,
    state: Arc<Mutex<MockState>>,
}

impl MockClient {
    fn ensure_authorized(&self) -> tgs_core::Result<String> {
        let token = self.token.lock().unwrap().clone();
        if self.state.lock().unwrap().authorized.contains(&token) && !token.is_empty() {
            Ok(token)
        } else {
            Err(ClientError::Unauthorized("session is not logged in".to_string()))
        }
    }
}

#[async_trait]
impl MessagingClient for MockClient {
    async fn qr_login(&self) -> tgs_core::Result<QrLogin> {
        let mut token = self.token.lock().unwrap();
        if token.is_empty() {
            let mut state = self.state.lock().unwrap();
            state.minted += 1;
            *token = format!("mock-session-{}", state.minted);
        }

        Ok(QrLogin {
            url: format!("tg://login?token={}", *token),
        })
    }

    async fn is_authorized(&self) -> tgs_core::Result<bool> {
        Ok(self.ensure_authorized().is_ok())
    }

    async fn send_message(&self, peer: &str, text: &str) -> tgs_core::Result<()> {
        let token = self.ensure_authorized()?;
        self.state
            .lock()
            .unwrap()
            .sent
            .push((token, peer.to_string(), text.to_string()));
        Ok(())
    }

    async fn get_messages(&self, peer: &str, limit: usize) -> tgs_core::Result<Vec<RawMessage>> {
        self.ensure_authorized()?;
        let state = self.state.lock().unwrap();
        let history = state
            .history
            .get(peer)
            .ok_or_else(|| ClientError::PeerNotFound(peer.to_string()))?;
        if state.ignore_limit {
            return Ok(history.clone());
        }
        Ok(history.iter().take(limit).cloned().collect())
    }

    fn save_session(&self) -> String {
        self.token.lock().unwrap().clone()
    }
}

/// Wired-up service over an in-memory database.
pub struct TestContext {
    pub accounts: AccountRepository,
    pub sessions: SessionRepository,
    pub connector: MockConnector,
    pub factory: ClientFactory,
    pub service: SessionService,
}

pub async fn setup() -> TestContext {
    let pool = SqlitePoolManager::new("sqlite::memory:")
        .await
        .expect("Failed to create pool");
    let accounts = AccountRepository::new(pool.clone());
    let sessions = SessionRepository::new(pool);
    let connector = MockConnector::new();

    let factory = ClientFactory::new(
        Arc::new(accounts.clone()),
        Arc::new(sessions.clone()),
        Arc::new(connector.clone()),
        ApiCredentials::new(12345, "test-hash"),
    );
    let service = SessionService::new(factory.clone());

    TestContext {
        accounts,
        sessions,
        connector,
        factory,
        service,
    }
}

pub fn message(sender: Option<&str>, outgoing: bool, text: &str) -> RawMessage {
    RawMessage {
        sender: sender.map(|username| Sender {
            id: 1,
            username: Some(username.to_string()),
        }),
        outgoing,
        text: text.to_string(),
    }
}
