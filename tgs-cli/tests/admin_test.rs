//! Integration tests for [`tgs_cli::Admin`] command handlers over an in-memory database.

use clap::Parser;
use tgs_cli::{Admin, Cli};

async fn run(admin: &Admin, args: &[&str]) -> anyhow::Result<String> {
    let cli = Cli::try_parse_from(std::iter::once("tgs").chain(args.iter().copied()))?;
    let mut out = Vec::new();
    admin.run(cli.command, &mut out).await?;
    Ok(String::from_utf8(out)?)
}

/// **Test: Add accounts, deactivate one session, list with and without filters.**
#[tokio::test]
async fn test_accounts_and_session_listing() {
    let admin = Admin::connect("sqlite::memory:").await.unwrap();

    let added = run(&admin, &["accounts", "add", "--phone", "+1000", "--username", "alice"])
        .await
        .unwrap();
    assert!(added.contains("Added account alice"));
    run(&admin, &["accounts", "add", "--phone", "+2000", "--username", "bob"])
        .await
        .unwrap();

    let empty = run(&admin, &["sessions", "list"]).await.unwrap();
    assert!(empty.contains("No sessions."));

    let no_session = run(&admin, &["sessions", "show", "+1000"]).await.unwrap();
    assert!(no_session.contains("No session for user alice"));

    assert!(run(&admin, &["sessions", "deactivate", "+1000"]).await.is_err());
}

/// **Test: Unknown phones are reported as errors.**
#[tokio::test]
async fn test_unknown_phone_is_error() {
    let admin = Admin::connect("sqlite::memory:").await.unwrap();

    let result = run(&admin, &["accounts", "remove", "+9999"]).await;

    assert!(result.is_err());
}

/// **Test: Duplicate phone is rejected.**
#[tokio::test]
async fn test_duplicate_account_is_error() {
    let admin = Admin::connect("sqlite::memory:").await.unwrap();
    run(&admin, &["accounts", "add", "--phone", "+1000", "--username", "alice"])
        .await
        .unwrap();

    let result = run(&admin, &["accounts", "add", "--phone", "+1000", "--username", "alice2"]).await;

    assert!(result.is_err());
}

/// **Test: Sessions written by the service layer are listed, shown and toggled.**
///
/// **Setup:** File database; accounts via the CLI, session tokens saved through `SessionRepository`.
/// **Action:** `sessions deactivate`, `sessions list --active ...`, `sessions show`, `accounts remove`.
/// **Expected:** Filters reflect the toggle; show prints a token preview; removal drops the session.
#[tokio::test]
async fn test_session_toggle_and_cascade() {
    use storage::{AccountDirectory, AccountRepository, SessionRepository, SessionStore, SqlitePoolManager};

    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite:{}", dir.path().join("tgs.db").display());
    let admin = Admin::connect(&url).await.unwrap();

    run(&admin, &["accounts", "add", "--phone", "+1000", "--username", "alice"])
        .await
        .unwrap();
    run(&admin, &["accounts", "add", "--phone", "+2000", "--username", "bob"])
        .await
        .unwrap();

    let pool = SqlitePoolManager::new(&url).await.unwrap();
    let accounts = AccountRepository::new(pool.clone());
    let sessions = SessionRepository::new(pool);
    for phone in ["+1000", "+2000"] {
        let account = accounts.find_by_phone(phone).await.unwrap().unwrap();
        sessions
            .save_token(account.id, "0123456789abcdef-rest-of-token")
            .await
            .unwrap();
    }

    let toggled = run(&admin, &["sessions", "deactivate", "+2000"]).await.unwrap();
    assert!(toggled.contains("Session for user bob is now inactive"));

    let active = run(&admin, &["sessions", "list", "--active", "true"]).await.unwrap();
    assert!(active.contains("alice"));
    assert!(!active.contains("bob"));

    let json = run(&admin, &["sessions", "list", "--active", "false", "--json"])
        .await
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.as_array().map(|a| a.len()), Some(1));
    assert_eq!(parsed[0]["username"], "bob");

    let shown = run(&admin, &["sessions", "show", "+1000"]).await.unwrap();
    assert!(shown.contains("Session for user alice"));
    assert!(shown.contains("0123456789abcdef..."));

    run(&admin, &["accounts", "remove", "+2000"]).await.unwrap();
    let remaining = run(&admin, &["sessions", "list", "--json"]).await.unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&remaining).unwrap();
    assert_eq!(parsed.as_array().map(|a| a.len()), Some(1));
}
