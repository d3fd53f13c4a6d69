//! Creation of the directory that cloned repositories are placed in.

use std::{fs, io, path::Path};

use tracing::{error, info};

use crate::errors::Error;

#[cfg(test)]
#[path = "destination_tests.rs"]
mod tests;

/// Creates the destination directory for a mirror run.
///
/// The directory is created non-recursively, so its parent must exist. An existing
/// directory is never reused: mixing a new mirror into an older one would make it
/// impossible to tell which repositories the run produced.
///
/// # Errors
///
/// Returns `Error::DestinationConflict` if `path` already exists and
/// `Error::DestinationCreation` for any other failure, such as a missing parent or
/// missing permissions.
pub fn prepare(path: &Path) -> Result<(), Error> {
    match fs::create_dir(path) {
        Ok(()) => {
            info!(
                "`{}` created at `{}`",
                display_name(path),
                display_parent(path)
            );
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            error!(
                path = ?path,
                "Destination directory already exists, refusing to continue"
            );
            Err(Error::DestinationConflict {
                path: path.to_path_buf(),
                name: display_name(path),
                parent: display_parent(path),
            })
        }
        Err(source) => Err(Error::DestinationCreation {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn display_parent(path: &Path) -> String {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.display().to_string(),
        _ => ".".to_string(),
    }
}
