use super::*;
use crate::commands::test_support::{mount_organization, options_for};
use std::fs;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn write_names(temp_dir: &TempDir, content: &str) -> PathBuf {
    let names_path = temp_dir.path().join("names.txt");
    fs::write(&names_path, content).expect("Failed to write names file");
    names_path
}

async fn expect_delete(mock_server: &MockServer, name: &str, times: u64) {
    Mock::given(method("DELETE"))
        .and(path(format!("/repos/tic/{name}")))
        .respond_with(ResponseTemplate::new(204))
        .expect(times)
        .mount(mock_server)
        .await;
}

#[tokio::test]
async fn test_execute_deletes_named_repositories() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let mock_server = MockServer::start().await;
    mount_organization(&mock_server, &["a", "b", "c"]).await;
    expect_delete(&mock_server, "b", 1).await;
    expect_delete(&mock_server, "a", 0).await;
    expect_delete(&mock_server, "c", 0).await;
    let (options, token_file) = options_for(&temp_dir, &mock_server);

    let args = PruneArgs {
        names_file: write_names(&temp_dir, "b\nnot-there\n"),
        token_file,
        backup_dir: None,
        dry_run: false,
    };
    let outcome = execute(&args, &options).await.expect("Prune should succeed");

    assert_eq!(outcome, CommandOutcome::Complete);
}

#[tokio::test]
async fn test_execute_dry_run_deletes_nothing() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let mock_server = MockServer::start().await;
    mount_organization(&mock_server, &["a", "b"]).await;
    expect_delete(&mock_server, "a", 0).await;
    expect_delete(&mock_server, "b", 0).await;
    let (options, token_file) = options_for(&temp_dir, &mock_server);

    let args = PruneArgs {
        names_file: write_names(&temp_dir, "a\nb\n"),
        token_file,
        backup_dir: None,
        dry_run: true,
    };
    let outcome = execute(&args, &options).await.expect("Dry run should succeed");

    assert_eq!(outcome, CommandOutcome::Complete);
}

#[tokio::test]
async fn test_execute_incomplete_backup_deletes_nothing() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let mock_server = MockServer::start().await;
    mount_organization(&mock_server, &["a", "b"]).await;
    expect_delete(&mock_server, "a", 0).await;
    let (options, token_file) = options_for(&temp_dir, &mock_server);

    let args = PruneArgs {
        names_file: write_names(&temp_dir, "a\n"),
        token_file,
        backup_dir: Some(temp_dir.path().join("backup")),
        dry_run: false,
    };
    let result = execute(&args, &options).await;

    assert!(matches!(
        result,
        Err(Error::Core(org_mirror_core::Error::BackupIncomplete {
            attempted: 2,
            failed: 2
        }))
    ));
}

#[tokio::test]
async fn test_execute_stops_at_first_failed_deletion() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let mock_server = MockServer::start().await;
    mount_organization(&mock_server, &["a", "b", "c"]).await;
    Mock::given(method("DELETE"))
        .and(path("/repos/tic/a"))
        .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
            "message": "Must have admin rights to Repository.",
            "documentation_url": "https://docs.github.com/rest"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;
    expect_delete(&mock_server, "c", 0).await;
    let (options, token_file) = options_for(&temp_dir, &mock_server);

    let args = PruneArgs {
        names_file: write_names(&temp_dir, "a\nc\n"),
        token_file,
        backup_dir: None,
        dry_run: false,
    };
    let result = execute(&args, &options).await;

    match result {
        Err(Error::Core(org_mirror_core::Error::DeletionFailure {
            repository,
            deleted,
            ..
        })) => {
            assert_eq!(repository, "tic/a");
            assert_eq!(deleted, 0);
        }
        other => panic!("Expected DeletionFailure, got {other:?}"),
    }
}

#[tokio::test]
async fn test_execute_empty_names_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let mock_server = MockServer::start().await;
    let (options, token_file) = options_for(&temp_dir, &mock_server);

    let args = PruneArgs {
        names_file: write_names(&temp_dir, "\n   \n"),
        token_file,
        backup_dir: None,
        dry_run: false,
    };
    let result = execute(&args, &options).await;

    assert!(matches!(result, Err(Error::InvalidArguments(_))));
}
