use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use dirzip_common::{canonize, clear_dir, clear_file, should_skip_compression, CleanupKind, OpError, ToolConfig};
use tempfile::tempdir;

#[test]
fn test_canonize_relative_uses_working_dir() {
    let cwd = env::current_dir().unwrap();
    let resolved = canonize(Path::new("some/dir/../archive.zip")).unwrap();

    assert!(resolved.is_absolute());
    assert_eq!(resolved, cwd.join("some").join("archive.zip"));
}

#[test]
fn test_canonize_folds_dots_in_absolute_path() {
    let root = tempdir().unwrap();
    let messy = root.path().join("a").join(".").join("b").join("..").join("c");

    let resolved = canonize(&messy).unwrap();

    assert_eq!(resolved, root.path().join("a").join("c"));
}

#[test]
fn test_canonize_does_not_require_existence() {
    let root = tempdir().unwrap();
    let missing = root.path().join("not").join("there.zip");

    assert_eq!(canonize(&missing).unwrap(), missing);
}

#[cfg(unix)]
#[test]
fn test_canonize_parent_of_root_stays_at_root() {
    assert_eq!(canonize(Path::new("/../../tmp")).unwrap(), PathBuf::from("/tmp"));
}

#[test]
fn test_canonize_rejects_empty_and_blank() {
    assert!(matches!(canonize(Path::new("")), Err(OpError::InvalidPath { .. })));
    assert!(matches!(canonize(Path::new("   ")), Err(OpError::InvalidPath { .. })));
}

#[cfg(unix)]
#[test]
fn test_canonize_rejects_nul_byte() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let input = Path::new(OsStr::from_bytes(b"bad\0name"));
    match canonize(input) {
        Err(OpError::InvalidPath { input: reported }) => assert_eq!(reported, input),
        other => panic!("expected InvalidPath, got {:?}", other),
    }
}

#[test]
fn test_clear_file_replaces_existing_file() {
    let dir = tempdir().unwrap();
    let target = dir.path().join("old.zip");
    fs::write(&target, b"stale").unwrap();

    clear_file(&target, true).unwrap();

    assert!(!target.exists());
}

#[test]
fn test_clear_file_conflict_keeps_file() {
    let dir = tempdir().unwrap();
    let target = dir.path().join("old.zip");
    fs::write(&target, b"stale").unwrap();

    let err = clear_file(&target, false).unwrap_err();

    assert!(matches!(err, OpError::DestinationExists { ref path } if path == &target));
    assert_eq!(fs::read(&target).unwrap(), b"stale");
}

#[test]
fn test_clear_file_ignores_directory_and_missing() {
    let dir = tempdir().unwrap();
    let sub = dir.path().join("looks-like.zip");
    fs::create_dir(&sub).unwrap();

    clear_file(&sub, false).unwrap();
    clear_file(&dir.path().join("nothing.zip"), false).unwrap();

    assert!(sub.is_dir());
}

#[test]
fn test_clear_dir_removes_whole_tree() {
    let dir = tempdir().unwrap();
    let target = dir.path().join("out");
    fs::create_dir_all(target.join("nested").join("deeper")).unwrap();
    fs::write(target.join("nested").join("deeper").join("unrelated.txt"), b"x").unwrap();

    clear_dir(&target, true).unwrap();

    assert!(!target.exists());
}

#[test]
fn test_clear_dir_conflict_and_file_passthrough() {
    let dir = tempdir().unwrap();
    let target = dir.path().join("out");
    fs::create_dir(&target).unwrap();
    let file = dir.path().join("plain");
    fs::write(&file, b"x").unwrap();

    assert!(matches!(clear_dir(&target, false), Err(OpError::DestinationExists { .. })));
    assert!(target.is_dir());

    clear_dir(&file, true).unwrap();
    assert!(file.is_file());
}

#[test]
fn test_cleanup_failed_message_names_kind() {
    let err = OpError::CleanupFailed {
        path: PathBuf::from("/x"),
        kind: CleanupKind::Directory,
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    };

    assert_eq!(err.to_string(), "could not remove directory /x: denied");
}

#[test]
fn test_should_skip_compression() {
    assert!(should_skip_compression(Path::new("photo.JPG")));
    assert!(should_skip_compression(Path::new("dir/backup.tar.gz")));
    assert!(should_skip_compression(Path::new("nested.zip")));
    assert!(!should_skip_compression(Path::new("README.md")));
    assert!(!should_skip_compression(Path::new("zip")));
}

#[test]
fn test_default_config() {
    let config = ToolConfig::default();

    assert_eq!(config.verbosity, 5);
    assert!(config.replace);
    assert!(config.skip_compression);
}
