//! Path value objects
//!
//! - `SafePath`: a relative path that cannot climb out of the game directory
//! - `absolutize`: anchors a path at a base directory, normalized lexically

use std::fmt;
use std::path::{Component, Path, PathBuf};

/// Error when path validation fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// Path contains traversal components (..)
    ContainsTraversal,
    /// Path is absolute when relative is required
    AbsoluteNotAllowed,
    /// Path is empty
    Empty,
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::ContainsTraversal => write!(f, "path contains traversal components (..)"),
            PathError::AbsoluteNotAllowed => write!(f, "absolute paths are not allowed"),
            PathError::Empty => write!(f, "path is empty"),
        }
    }
}

impl std::error::Error for PathError {}

/// A validated relative path
///
/// - Path is relative (no root, no drive prefix)
/// - No traversal (..)
/// - Non-empty
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SafePath(PathBuf);

impl SafePath {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, PathError> {
        let path = path.as_ref();

        if path.as_os_str().is_empty() {
            return Err(PathError::Empty);
        }

        if path.is_absolute() || path.has_root() {
            return Err(PathError::AbsoluteNotAllowed);
        }

        for component in path.components() {
            match component {
                Component::ParentDir => return Err(PathError::ContainsTraversal),
                Component::Prefix(_) | Component::RootDir => {
                    return Err(PathError::AbsoluteNotAllowed)
                }
                Component::CurDir | Component::Normal(_) => {}
            }
        }

        Ok(Self(path.to_path_buf()))
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

/// Anchor `path` at `base` unless it is already absolute, then drop `.`
/// and resolve `..` lexically. Symlinks are not followed.
///
/// `..` at the root stays at the root.
pub fn absolutize(path: &Path, base: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    };
    normalize(&joined)
}

fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(prefix) => out.push(prefix.as_os_str()),
            Component::RootDir => out.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                // pop() refuses to remove the root, which is what we want
                out.pop();
            }
            Component::Normal(part) => out.push(part),
        }
    }
    out
}
