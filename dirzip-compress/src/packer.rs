use std::{
    fs::{self, File},
    io::{self, BufReader, BufWriter, Write},
    path::Path,
};

use log::{debug, info, warn};
use walkdir::WalkDir;
use zip::{write::SimpleFileOptions, CompressionMethod, ZipWriter};

use dirzip_common::{canonize, clear_file, should_skip_compression, OpError, ToolConfig, ZipReport};

/// Packs the directory tree at `source` into a new zip archive at
/// `destination`. Entry names are relative to `source`.
///
/// An existing file at `destination` is removed first when
/// `config.replace` is set, otherwise the call fails with
/// [`OpError::DestinationExists`]. A half-written archive is deleted again
/// if anything goes wrong while packing.
pub fn zip_dir(source: &Path, destination: &Path, config: &ToolConfig) -> Result<ZipReport, OpError> {
    let source_path = canonize(source)?;
    let destination_path = canonize(destination)?;
    debug!("zip {} -> {}", source_path.display(), destination_path.display());

    clear_file(&destination_path, config.replace)?;

    if !source_path.is_dir() {
        return Err(OpError::SourceNotFound { path: source_path });
    }

    let file = File::create(&destination_path)?;
    let mut report = ZipReport {
        source: source_path.clone(),
        destination: destination_path.clone(),
        total_files: 0,
        total_dirs: 0,
        stored_files: 0,
        total_bytes_in: 0,
        total_bytes_out: 0,
    };

    let packed = write_entries(BufWriter::new(file), &source_path, &destination_path, config, &mut report);
    if let Err(e) = packed {
        if let Err(rm) = fs::remove_file(&destination_path) {
            warn!("could not remove partial archive {}: {}", destination_path.display(), rm);
        }
        return Err(e);
    }

    report.total_bytes_out = fs::metadata(&destination_path)?.len();
    info!(
        "packed {} files and {} directories ({} stored), {} -> {} bytes",
        report.total_files, report.total_dirs, report.stored_files, report.total_bytes_in, report.total_bytes_out
    );
    Ok(report)
}

fn write_entries<W: Write + io::Seek>(
    out: W,
    source: &Path,
    archive_path: &Path,
    config: &ToolConfig,
    report: &mut ZipReport,
) -> Result<(), OpError> {
    let mut zip = ZipWriter::new(out);
    let options = |method: CompressionMethod| SimpleFileOptions::default().compression_method(method);
    const ZIP64_THRESHOLD: u64 = u32::MAX as u64;

    let walker = WalkDir::new(source)
        .min_depth(1)
        .follow_links(false)
        .sort_by_file_name();

    for entry in walker {
        let entry = entry?;
        let path = entry.path();

        if path == archive_path {
            debug!("skipping the archive itself at {}", path.display());
            continue;
        }

        let name = entry_name(path.strip_prefix(source).map_err(|e| OpError::archive(e.to_string()))?);
        let file_type = entry.file_type();

        if file_type.is_dir() {
            debug!("[dir] {}", name);
            zip.add_directory(name, options(CompressionMethod::Deflated))?;
            report.total_dirs += 1;
        } else if file_type.is_file() {
            let store = config.skip_compression && should_skip_compression(path);
            let method = if store { CompressionMethod::Stored } else { CompressionMethod::Deflated };
            let len = entry.metadata()?.len();
            debug!("[file] {} {} bytes (stored={})", name, len, store);

            // zip64 headers are needed once an entry may reach 4 GiB
            zip.start_file(name, options(method).large_file(len >= ZIP64_THRESHOLD))?;
            let mut input = BufReader::new(File::open(path)?);
            report.total_bytes_in += io::copy(&mut input, &mut zip)?;
            report.total_files += 1;
            if store {
                report.stored_files += 1;
            }
        } else {
            warn!("skipping symbolic link {}", path.display());
        }
    }

    let mut inner = zip.finish()?;
    inner.flush()?;
    Ok(())
}

/// Zip entry names always use `/`, whatever the host separator is.
fn entry_name(relative: &Path) -> String {
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
