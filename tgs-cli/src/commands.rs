//! Command handlers. Output goes to the given writer so handlers can be exercised in tests.

use std::io::Write;

use anyhow::{bail, Context, Result};
use storage::{
    Account, AccountDirectory, AccountRepository, SessionOverview, SessionQuery,
    SessionRepository, SessionStore, SqlitePoolManager,
};
use tracing::info;

use crate::cli::{AccountCommands, Commands, SessionCommands};

const TOKEN_PREVIEW_LEN: usize = 16;

/// Repositories over one database.
#[derive(Clone)]
pub struct Admin {
    accounts: AccountRepository,
    sessions: SessionRepository,
}

impl Admin {
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = SqlitePoolManager::new(database_url)
            .await
            .with_context(|| format!("Open database {}", database_url))?;
        Ok(Self {
            accounts: AccountRepository::new(pool.clone()),
            sessions: SessionRepository::new(pool),
        })
    }

    pub async fn run(&self, command: Commands, out: &mut impl Write) -> Result<()> {
        match command {
            Commands::Accounts { command } => self.run_accounts(command, out).await,
            Commands::Sessions { command } => self.run_sessions(command, out).await,
        }
    }

    async fn run_accounts(&self, command: AccountCommands, out: &mut impl Write) -> Result<()> {
        match command {
            AccountCommands::Add { phone, username } => {
                let account = self.accounts.create(&phone, &username).await?;
                writeln!(out, "Added account {} ({}, id={})", account.username, account.phone, account.id)?;
            }
            AccountCommands::Remove { phone } => {
                let account = self.account(&phone).await?;
                self.accounts.delete(account.id).await?;
                info!("Removed account {}", account.id);
                writeln!(out, "Removed account {} ({})", account.username, account.phone)?;
            }
        }
        Ok(())
    }

    async fn run_sessions(&self, command: SessionCommands, out: &mut impl Write) -> Result<()> {
        match command {
            SessionCommands::List {
                active,
                search,
                limit,
                json,
            } => {
                let query = SessionQuery {
                    active,
                    search,
                    limit,
                };
                let sessions = self.sessions.list(&query).await?;
                if json {
                    writeln!(out, "{}", serde_json::to_string_pretty(&sessions)?)?;
                } else {
                    print_sessions(&sessions, out)?;
                }
            }
            SessionCommands::Show { phone } => {
                let account = self.account(&phone).await?;
                match self.sessions.find_by_owner(account.id).await? {
                    Some(record) => {
                        writeln!(out, "Session for user {}", account.username)?;
                        writeln!(out, "  phone:      {}", account.phone)?;
                        writeln!(out, "  token:      {}", token_preview(&record.token))?;
                        writeln!(out, "  active:     {}", record.is_active)?;
                        writeln!(out, "  created_at: {}", record.created_at.format("%Y-%m-%d %H:%M:%S"))?;
                        writeln!(out, "  updated_at: {}", record.updated_at.format("%Y-%m-%d %H:%M:%S"))?;
                    }
                    None => writeln!(out, "No session for user {}", account.username)?,
                }
            }
            SessionCommands::Activate { phone } => self.set_active(&phone, true, out).await?,
            SessionCommands::Deactivate { phone } => self.set_active(&phone, false, out).await?,
        }
        Ok(())
    }

    async fn set_active(&self, phone: &str, active: bool, out: &mut impl Write) -> Result<()> {
        let account = self.account(phone).await?;
        let record = self.sessions.set_active(account.id, active).await?;
        writeln!(
            out,
            "Session for user {} is now {}",
            account.username,
            if record.is_active { "active" } else { "inactive" }
        )?;
        Ok(())
    }

    async fn account(&self, phone: &str) -> Result<Account> {
        match self.accounts.find_by_phone(phone).await? {
            Some(account) => Ok(account),
            None => bail!("No account with phone {}", phone),
        }
    }
}

fn token_preview(token: &str) -> String {
    if token.is_empty() {
        return "(empty)".to_string();
    }
    if token.len() <= TOKEN_PREVIEW_LEN {
        return token.to_string();
    }
    let mut end = TOKEN_PREVIEW_LEN;
    while !token.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &token[..end])
}

fn print_sessions(sessions: &[SessionOverview], out: &mut impl Write) -> Result<()> {
    if sessions.is_empty() {
        writeln!(out, "No sessions.")?;
        return Ok(());
    }

    writeln!(
        out,
        "{:<16} {:<20} {:<8} {:<20} {}",
        "phone", "username", "active", "updated_at", "token"
    )?;
    writeln!(out, "{}", "-".repeat(90))?;
    for s in sessions {
        writeln!(
            out,
            "{:<16} {:<20} {:<8} {:<20} {}",
            s.phone,
            s.username,
            s.is_active,
            s.updated_at.format("%Y-%m-%d %H:%M:%S"),
            token_preview(&s.token)
        )?;
    }
    Ok(())
}
