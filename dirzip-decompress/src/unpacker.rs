use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::Path;

use log::{debug, info};
use zip::ZipArchive;

use dirzip_common::{canonize, clear_dir, OpError, ToolConfig, UnzipReport};

/// Extracts the zip archive at `source` into the directory `destination`.
///
/// An existing directory at `destination` is removed recursively before
/// extraction when `config.replace` is set; otherwise the call fails with
/// [`OpError::DestinationExists`]. The destination directory is created even
/// when the archive has no entries.
pub fn unzip_archive(source: &Path, destination: &Path, config: &ToolConfig) -> Result<UnzipReport, OpError> {
    let source_path = canonize(source)?;
    let destination_path = canonize(destination)?;
    debug!("unzip {} -> {}", source_path.display(), destination_path.display());

    clear_dir(&destination_path, config.replace)?;

    let file = match File::open(&source_path) {
        Ok(f) => f,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(OpError::SourceNotFound { path: source_path });
        }
        Err(e) => return Err(e.into()),
    };
    let mut archive = ZipArchive::new(BufReader::new(file))?;

    let mut report = UnzipReport {
        source: source_path,
        destination: destination_path,
        total_entries: archive.len() as u64,
        total_files: 0,
        total_dirs: 0,
        total_bytes_out: 0,
    };
    for i in 0..archive.len() {
        let entry = archive.by_index(i)?;
        if entry.is_dir() {
            report.total_dirs += 1;
        } else {
            report.total_files += 1;
            report.total_bytes_out += entry.size();
        }
    }

    fs::create_dir_all(&report.destination)?;
    archive.extract(&report.destination)?;

    info!(
        "extracted {} entries ({} files, {} directories), {} bytes into {}",
        report.total_entries,
        report.total_files,
        report.total_dirs,
        report.total_bytes_out,
        report.destination.display()
    );
    Ok(report)
}
