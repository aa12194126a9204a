use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::cleanup::CleanupKind;

/// Why a zip or unzip operation gave up. Nothing is retried; the first
/// failure ends the operation.
#[derive(Debug, Error)]
pub enum OpError {
    #[error("invalid path {input:?}")]
    InvalidPath { input: PathBuf },

    #[error("destination {} already exists", path.display())]
    DestinationExists { path: PathBuf },

    #[error("could not remove {kind} {}: {source}", path.display())]
    CleanupFailed {
        path: PathBuf,
        kind: CleanupKind,
        #[source]
        source: io::Error,
    },

    #[error("could not find a part of the path '{}'", path.display())]
    SourceNotFound { path: PathBuf },

    #[error("{message}")]
    Archive { message: String },
}

impl OpError {
    pub fn archive(message: impl Into<String>) -> Self {
        OpError::Archive { message: message.into() }
    }
}

impl From<io::Error> for OpError {
    fn from(e: io::Error) -> Self {
        OpError::archive(e.to_string())
    }
}

impl From<zip::result::ZipError> for OpError {
    fn from(e: zip::result::ZipError) -> Self {
        OpError::archive(e.to_string())
    }
}

impl From<walkdir::Error> for OpError {
    fn from(e: walkdir::Error) -> Self {
        OpError::archive(e.to_string())
    }
}
