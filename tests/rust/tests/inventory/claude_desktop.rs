//! Exact-key reconciliation for Claude Desktop configs.

use mcpscout_core::{ClientInspector, ClientKind, ReconciledEntry};
use pretty_assertions::assert_eq;
use tests::fixtures;

#[tokio::test]
async fn known_and_unknown_keys_both_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = fixtures::write_claude_config(dir.path(), &["filesystem", "ghost"]);

    let entries = ClientInspector::new(ClientKind::ClaudeDesktop, fixtures::registry())
        .with_config_path(&path)
        .inspect()
        .await
        .unwrap();

    assert_eq!(
        entries,
        vec![
            ReconciledEntry::recognized(ClientKind::ClaudeDesktop, "filesystem"),
            ReconciledEntry::unrecognized(ClientKind::ClaudeDesktop, "ghost"),
        ]
    );
}

#[tokio::test]
async fn recognized_listed_before_unrecognized() {
    let dir = tempfile::tempdir().unwrap();
    // Unknown key first in the file; recognized entries still lead the report.
    let path = fixtures::write_claude_config(dir.path(), &["ghost", "memory", "filesystem"]);

    let entries = ClientInspector::new(ClientKind::ClaudeDesktop, fixtures::registry())
        .with_config_path(&path)
        .inspect()
        .await
        .unwrap();

    let ids: Vec<&str> = entries.iter().map(|e| e.server_id.as_str()).collect();
    assert_eq!(ids, ["memory", "filesystem", "ghost"]);
    assert!(entries[0].recognized && entries[1].recognized);
    assert!(!entries[2].recognized);
}

#[tokio::test]
async fn missing_file_yields_empty_without_error() {
    let dir = tempfile::tempdir().unwrap();

    let entries = ClientInspector::new(ClientKind::ClaudeDesktop, fixtures::registry())
        .with_config_path(dir.path().join("claude_desktop_config.json"))
        .inspect()
        .await
        .unwrap();

    assert!(entries.is_empty());
}

#[tokio::test]
async fn inspection_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = fixtures::write_claude_config(dir.path(), &["filesystem", "ghost", "memory"]);

    let inspector = ClientInspector::new(ClientKind::ClaudeDesktop, fixtures::registry())
        .with_config_path(&path);

    let first = inspector.inspect().await.unwrap();
    let second = inspector.inspect().await.unwrap();
    assert_eq!(first, second);
}
