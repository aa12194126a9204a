use std::path::Path;

/// Suffixes of formats that are already compressed. Deflating them again
/// costs time and rarely saves a byte, so they go into the archive stored.
const STORED_SUFFIXES: &[&str] = &[
    // archives
    ".zip", ".gz", ".bz2", ".xz", ".7z", ".rar", ".lz", ".lz4", ".zst",
    ".tgz", ".tbz", ".txz",
    // java / android
    ".jar", ".war", ".ear", ".apk",
    // disk images
    ".dmg",
    // audio
    ".mp3", ".aac", ".ogg", ".flac", ".m4a", ".opus",
    // video
    ".mp4", ".mkv", ".mov", ".webm",
    // images
    ".jpg", ".jpeg", ".png", ".gif", ".webp", ".heic", ".avif",
    // office containers are zips already
    ".docx", ".xlsx", ".pptx", ".odt", ".ods",
    // fonts
    ".woff", ".woff2",
    // data
    ".npz", ".parquet",
];

/// `true` when the file name ends in one of the already-compressed suffixes
/// (case-insensitive).
pub fn should_skip_compression(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    let lower = name.to_ascii_lowercase();
    STORED_SUFFIXES.iter().any(|suffix| lower.ends_with(suffix))
}
