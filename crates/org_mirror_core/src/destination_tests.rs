use super::*;
use tempfile::TempDir;

#[test]
fn test_prepare_creates_directory() {
    let temp_dir = TempDir::new().unwrap();
    let destination = temp_dir.path().join("backup");

    prepare(&destination).expect("Destination should be created");

    assert!(destination.is_dir());
    assert_eq!(fs::read_dir(&destination).unwrap().count(), 0);
}

#[test]
fn test_prepare_twice_reports_conflict_and_keeps_contents() {
    let temp_dir = TempDir::new().unwrap();
    let destination = temp_dir.path().join("backup");

    prepare(&destination).expect("First call should succeed");
    fs::write(destination.join("marker.txt"), "previous run").unwrap();

    let result = prepare(&destination);

    match result {
        Err(Error::DestinationConflict { path, name, parent }) => {
            assert_eq!(path, destination);
            assert_eq!(name, "backup");
            assert_eq!(parent, temp_dir.path().display().to_string());
        }
        other => panic!("Expected DestinationConflict, got {other:?}"),
    }
    assert_eq!(
        fs::read_to_string(destination.join("marker.txt")).unwrap(),
        "previous run",
        "Existing contents must not be touched"
    );
    assert_eq!(fs::read_dir(&destination).unwrap().count(), 1);
}

#[test]
fn test_prepare_existing_empty_directory_is_a_conflict() {
    let temp_dir = TempDir::new().unwrap();

    let result = prepare(temp_dir.path());

    assert!(matches!(result, Err(Error::DestinationConflict { .. })));
}

#[test]
fn test_prepare_existing_file_is_a_conflict() {
    let temp_dir = TempDir::new().unwrap();
    let destination = temp_dir.path().join("taken");
    fs::write(&destination, "not a directory").unwrap();

    let result = prepare(&destination);

    assert!(matches!(result, Err(Error::DestinationConflict { .. })));
    assert!(destination.is_file());
}

#[test]
fn test_prepare_missing_parent_is_not_created() {
    let temp_dir = TempDir::new().unwrap();
    let destination = temp_dir.path().join("missing").join("backup");

    let result = prepare(&destination);

    assert!(matches!(result, Err(Error::DestinationCreation { .. })));
    assert!(!temp_dir.path().join("missing").exists());
}

#[test]
fn test_display_parent_of_relative_path() {
    assert_eq!(display_parent(Path::new("backup")), ".");
    assert_eq!(display_name(Path::new("backup")), "backup");
}
