use super::*;
use crate::commands::test_support::{mount_organization, options_for};
use org_mirror_core::CloneError;
use std::fs;
use tempfile::TempDir;
use wiremock::MockServer;

fn cloned(name: &str) -> ClonedRepository {
    ClonedRepository {
        name: name.to_string(),
        source: format!("https://github.com/tic/{name}.git"),
        target: PathBuf::from("backup").join(name),
    }
}

fn failed(name: &str) -> FailedClone {
    FailedClone {
        name: name.to_string(),
        source: format!("https://github.com/tic/{name}.git"),
        error: CloneError::new("remote: Repository not found."),
    }
}

#[test]
fn test_clone_summary_complete() {
    let report = CloneReport {
        cloned: vec![cloned("a"), cloned("b")],
        failed: vec![],
    };

    assert_eq!(clone_summary(&report), "Cloned all 2 repositories");
}

#[test]
fn test_clone_summary_partial() {
    let report = CloneReport {
        cloned: vec![cloned("a")],
        failed: vec![failed("b")],
    };

    assert_eq!(
        clone_summary(&report),
        "Cloned 1 of 2 repositories, 1 failed"
    );
}

#[test]
fn test_status_lines() {
    assert_eq!(
        cloned_line(&cloned("a")),
        format!(
            "https://github.com/tic/a.git to {}",
            PathBuf::from("backup").join("a").display()
        )
    );
    assert_eq!(
        failed_line(&failed("b")),
        "https://github.com/tic/b.git: remote: Repository not found."
    );
}

#[tokio::test]
async fn test_execute_existing_destination_is_rejected() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let mock_server = MockServer::start().await;
    let (options, token_file) = options_for(&temp_dir, &mock_server);
    let destination = temp_dir.path().join("backup");
    fs::create_dir(&destination).unwrap();

    let args = CloneArgs {
        destination,
        token_file,
    };
    let result = execute(&args, &options).await;

    assert!(matches!(
        result,
        Err(Error::Core(org_mirror_core::Error::DestinationConflict { .. }))
    ));
    let requests = mock_server.received_requests().await.unwrap_or_default();
    assert!(requests.is_empty(), "GitHub must not be contacted");
}

#[tokio::test]
async fn test_execute_missing_token_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let mock_server = MockServer::start().await;
    let (options, _) = options_for(&temp_dir, &mock_server);

    let args = CloneArgs {
        destination: temp_dir.path().join("backup"),
        token_file: temp_dir.path().join("missing-token.txt"),
    };
    let result = execute(&args, &options).await;

    assert!(matches!(
        result,
        Err(Error::Core(org_mirror_core::Error::TokenFileUnreadable { .. }))
    ));
    assert!(!temp_dir.path().join("backup").exists());
}

#[tokio::test]
async fn test_execute_failed_clones_make_the_outcome_partial() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let mock_server = MockServer::start().await;
    mount_organization(&mock_server, &["alpha", "beta"]).await;
    let (options, token_file) = options_for(&temp_dir, &mock_server);

    let args = CloneArgs {
        destination: temp_dir.path().join("backup"),
        token_file,
    };
    let outcome = execute(&args, &options)
        .await
        .expect("Failed clones must not fail the command");

    assert_eq!(outcome, CommandOutcome::Partial);
    assert_eq!(outcome.exit_code(), 1);
    assert!(temp_dir.path().join("backup").is_dir());
}

#[tokio::test]
async fn test_execute_without_organization_name() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("empty.toml");
    fs::write(&config_path, "").unwrap();
    let options = GlobalOptions {
        config: Some(config_path),
        org: None,
    };

    let args = CloneArgs {
        destination: temp_dir.path().join("backup"),
        token_file: temp_dir.path().join("token.txt"),
    };
    let result = execute(&args, &options).await;

    assert!(matches!(result, Err(Error::Config(_))));
}
