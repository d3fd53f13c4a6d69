use super::*;
use std::error::Error as StdError;

#[test]
fn test_auth_error_converts_to_authentication() {
    let error = Error::from(github_client::Error::AuthError("Bad credentials".to_string()));

    assert!(matches!(error, Error::Authentication(ref msg) if msg == "Bad credentials"));
    assert_eq!(
        error.to_string(),
        "Authentication with GitHub failed: Bad credentials"
    );
}

#[test]
fn test_other_github_errors_convert_to_github() {
    let error = Error::from(github_client::Error::NotFound);

    assert!(matches!(error, Error::GitHub(github_client::Error::NotFound)));
    assert!(error.source().is_some());
}

#[test]
fn test_destination_conflict_display_names_remediation() {
    let error = Error::DestinationConflict {
        path: PathBuf::from("/backups/tic"),
        name: "tic".to_string(),
        parent: "/backups".to_string(),
    };

    let message = error.to_string();
    assert!(message.contains("`tic` already exists at `/backups`"));
    assert!(message.contains("choose a different name or location"));
}

#[test]
fn test_deletion_failure_keeps_source() {
    let error = Error::DeletionFailure {
        repository: "tic/old".to_string(),
        deleted: 2,
        source: github_client::Error::NotFound,
    };

    assert_eq!(
        error.to_string(),
        "Failed to delete repository tic/old after deleting 2 repositories: Resource not found"
    );
    assert!(error.source().is_some());
}

#[test]
fn test_backup_incomplete_display() {
    let error = Error::BackupIncomplete {
        attempted: 5,
        failed: 1,
    };

    assert_eq!(
        error.to_string(),
        "Backup incomplete: 1 of 5 repositories failed to clone. Nothing was deleted."
    );
}

#[test]
fn test_clone_error_displays_diagnostic() {
    let error = CloneError::new("fatal: repository not found");

    assert_eq!(error.to_string(), "fatal: repository not found");
}

#[test]
fn test_error_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Error>();
    assert_send_sync::<CloneError>();
}
