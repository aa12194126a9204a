use std::fmt;
use std::fs;
use std::path::Path;

use log::debug;

use crate::OpError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanupKind {
    File,
    Directory,
}

impl fmt::Display for CleanupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CleanupKind::File => f.write_str("file"),
            CleanupKind::Directory => f.write_str("directory"),
        }
    }
}

/// Makes room for an archive at `path`. Only an existing *file* counts as a
/// conflict; a directory there is left for the archive writer to trip over.
pub fn clear_file(path: &Path, replace: bool) -> Result<(), OpError> {
    if !path.is_file() {
        return Ok(());
    }
    if !replace {
        return Err(OpError::DestinationExists {
            path: path.to_path_buf(),
        });
    }

    debug!("removing existing file {}", path.display());
    fs::remove_file(path).map_err(|source| OpError::CleanupFailed {
        path: path.to_path_buf(),
        kind: CleanupKind::File,
        source,
    })
}

/// Makes room for an extraction into `path`. Only an existing *directory*
/// counts as a conflict and it is removed with everything below it.
pub fn clear_dir(path: &Path, replace: bool) -> Result<(), OpError> {
    if !path.is_dir() {
        return Ok(());
    }
    if !replace {
        return Err(OpError::DestinationExists {
            path: path.to_path_buf(),
        });
    }

    debug!("removing existing directory tree {}", path.display());
    fs::remove_dir_all(path).map_err(|source| OpError::CleanupFailed {
        path: path.to_path_buf(),
        kind: CleanupKind::Directory,
        source,
    })
}
