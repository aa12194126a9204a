use std::env;
use std::path::{Component, Path, PathBuf};

use crate::OpError;

/// Turns a user-supplied path into an absolute one with `.` and `..` folded
/// away. Relative input is resolved against the current working directory.
///
/// Resolution is purely lexical: the path does not need to exist and
/// symbolic links are left alone. Empty, blank or NUL-containing input is
/// rejected with [`OpError::InvalidPath`].
pub fn canonize(input: &Path) -> Result<PathBuf, OpError> {
    let invalid = || OpError::InvalidPath {
        input: input.to_path_buf(),
    };

    let raw = input.as_os_str();
    let blank = raw.to_str().is_some_and(|s| s.trim().is_empty());
    if blank || raw.as_encoded_bytes().contains(&0) {
        return Err(invalid());
    }

    let absolute = if input.is_absolute() {
        input.to_path_buf()
    } else {
        env::current_dir().map_err(|_| invalid())?.join(input)
    };

    Ok(normalize(&absolute))
}

fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => out.push(component.as_os_str()),
            Component::CurDir => {}
            // popping past the root is a no-op
            Component::ParentDir => {
                out.pop();
            }
            Component::Normal(part) => out.push(part),
        }
    }
    out
}
