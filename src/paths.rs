//! Filesystem helpers for locating an object relative to its repository root.

use std::path::{Component, Path, PathBuf};

use crate::error::Error;

/// Absolute form of `path` without touching symlinks.
///
/// # Errors
///
/// Returns `Error::Io` if the current directory cannot be read.
pub fn absolute_path(path: &Path) -> Result<PathBuf, Error> {
    return Ok(std::path::absolute(path)?);
}

/// Whether `path` exists and is a directory (following symlinks).
pub fn is_directory(path: &Path) -> bool {
    return std::fs::metadata(path).is_ok_and(|m| return m.is_dir());
}

/// Whether `path` exists and is a regular file (following symlinks).
pub fn is_regular_file(path: &Path) -> bool {
    return std::fs::metadata(path).is_ok_and(|m| return m.file_type().is_file());
}

/// Path of `to` relative to `from`, `/`-separated. Both sides are resolved
/// through symlinks first; the same location yields an empty string.
///
/// # Errors
///
/// Returns `Error::NotARepository` when `to` is not located under `from`.
pub fn relative_path(from: &Path, to: &Path) -> Result<String, Error> {
    let base = resolve_symlinks(from);
    let target = resolve_symlinks(to);

    let Ok(relative) = target.strip_prefix(&base) else {
        return Err(Error::NotARepository { path: to.to_path_buf() });
    };

    let segments: Vec<String> = relative
        .components()
        .filter_map(|c| {
            return match c {
                Component::Normal(segment) => Some(segment.to_string_lossy().into_owned()),
                Component::CurDir | Component::ParentDir | Component::Prefix(_) | Component::RootDir => None,
            };
        })
        .collect();
    return Ok(segments.join("/"));
}

/// Canonical form of `path`. Falls back to the path as given when it
/// cannot be canonicalized.
pub fn resolve_symlinks(path: &Path) -> PathBuf {
    return std::fs::canonicalize(path).unwrap_or_else(|_| return path.to_path_buf());
}
