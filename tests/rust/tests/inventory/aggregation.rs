//! Aggregation policy: best-effort without a selection, hard failure with one.

use mcpscout_core::{ClientKind, InspectError, InventoryService};
use pretty_assertions::assert_eq;
use tests::fixtures;

#[tokio::test]
async fn corrupt_client_suppressed_when_inventorying_all() {
    let dir = tempfile::tempdir().unwrap();
    let claude_path = dir.path().join("claude_desktop_config.json");
    std::fs::write(&claude_path, "not valid json").unwrap();
    let continue_path = fixtures::write_continue_config(
        dir.path(),
        &[("npx", &["-y", "@modelcontextprotocol/server-memory"])],
    );

    let service = InventoryService::new(fixtures::registry())
        .with_config_path(ClientKind::ClaudeDesktop, &claude_path)
        .with_config_path(ClientKind::Continue, &continue_path);

    let report = service.run(None).await.unwrap();

    assert!(report.found_any());
    assert_eq!(report.listings.len(), 2);
    assert!(report.listings[0].is_empty());
    assert_eq!(report.listings[1].entries[0].server_id, "memory");
}

#[tokio::test]
async fn corrupt_client_fails_when_explicitly_selected() {
    let dir = tempfile::tempdir().unwrap();
    let claude_path = dir.path().join("claude_desktop_config.json");
    std::fs::write(&claude_path, "not valid json").unwrap();

    let service = InventoryService::new(fixtures::registry())
        .with_config_path(ClientKind::ClaudeDesktop, &claude_path);

    let err = service
        .run(Some(ClientKind::ClaudeDesktop))
        .await
        .unwrap_err();

    let InspectError::ConfigUnavailable { client, path, .. } = err;
    assert_eq!(client, ClientKind::ClaudeDesktop);
    assert_eq!(path, claude_path);
}

#[tokio::test]
async fn no_configs_anywhere_reports_nothing_found() {
    let dir = tempfile::tempdir().unwrap();

    let service = InventoryService::new(fixtures::registry())
        .with_config_path(ClientKind::ClaudeDesktop, dir.path().join("absent-a.json"))
        .with_config_path(ClientKind::Continue, dir.path().join("absent-b.json"));

    let report = service.run(None).await.unwrap();

    assert!(!report.found_any());
    assert_eq!(report.listings.len(), 2);
}

#[tokio::test]
async fn selection_restricts_report_to_one_client() {
    let dir = tempfile::tempdir().unwrap();
    let claude_path = fixtures::write_claude_config(dir.path(), &["filesystem"]);
    let continue_path = fixtures::write_continue_config(
        dir.path(),
        &[("npx", &["-y", "@modelcontextprotocol/server-memory"])],
    );

    let service = InventoryService::new(fixtures::registry())
        .with_config_path(ClientKind::ClaudeDesktop, &claude_path)
        .with_config_path(ClientKind::Continue, &continue_path);

    let report = service
        .run(Some(ClientKind::Continue))
        .await
        .unwrap();

    assert_eq!(report.listings.len(), 1);
    assert_eq!(report.listings[0].client, ClientKind::Continue);
    assert!(report.found_any());
}

#[tokio::test]
async fn repeated_runs_yield_identical_reports() {
    let dir = tempfile::tempdir().unwrap();
    let claude_path = fixtures::write_claude_config(dir.path(), &["memory", "ghost"]);

    let service = InventoryService::new(fixtures::registry())
        .with_config_path(ClientKind::ClaudeDesktop, &claude_path)
        .with_config_path(ClientKind::Continue, dir.path().join("absent.json"));

    let first = service.run(None).await.unwrap();
    let second = service.run(None).await.unwrap();
    assert_eq!(first, second);
}
