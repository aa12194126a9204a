pub mod cleanup;
pub mod common_config;
pub mod error;
pub mod path;
mod skip;

use std::path::PathBuf;

pub use cleanup::{clear_dir, clear_file, CleanupKind};
pub use common_config::{ToolConfig, DEFAULT_VERBOSITY};
pub use error::OpError;
pub use path::canonize;
pub use skip::should_skip_compression;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZipReport {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub total_files: u64,
    pub total_dirs: u64,
    pub stored_files: u64, // written without deflate
    pub total_bytes_in: u64,
    pub total_bytes_out: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnzipReport {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub total_entries: u64,
    pub total_files: u64,
    pub total_dirs: u64,
    pub total_bytes_out: u64,
}
