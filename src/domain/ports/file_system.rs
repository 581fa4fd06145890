//! FileSystem port - abstraction over the link/copy operations
//!
//! The deploy use case only talks to this trait, so tests can swap the
//! local disk for a recording double.

use std::path::{Path, PathBuf};

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug)]
pub enum FsError {
    /// Source or destination not found
    NotFound(PathBuf),
    /// Permission denied
    PermissionDenied { op: &'static str, path: PathBuf },
    /// I/O error
    Io {
        op: &'static str,
        path: PathBuf,
        source: std::io::Error,
    },
    /// Operation not available on this platform
    Unsupported(String),
}

impl FsError {
    /// Attach the failing operation and path to an I/O error.
    pub fn io(op: &'static str, path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied {
                op,
                path: path.to_path_buf(),
            },
            _ => FsError::Io {
                op,
                path: path.to_path_buf(),
                source: err,
            },
        }
    }
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsError::NotFound(path) => write!(f, "Not found: {}", path.display()),
            FsError::PermissionDenied { op, path } => {
                write!(f, "Permission denied ({}): {}", op, path.display())
            }
            FsError::Io { op, path, source } => {
                write!(f, "I/O error ({}) on {}: {}", op, path.display(), source)
            }
            FsError::Unsupported(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for FsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FsError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Outcome of an idempotent delete
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// Something was at the path and is gone now
    Removed,
    /// Nothing was at the path
    AlreadyAbsent,
}

impl RemoveOutcome {
    pub fn was_removed(self) -> bool {
        self == RemoveOutcome::Removed
    }
}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O
/// - `RecordingFs` - in-memory double used by the use case tests
pub trait FileSystem {
    /// Check if a path exists (following symlinks)
    fn exists(&self, path: &Path) -> bool;

    /// Create directory and parents
    fn create_dir_all(&self, path: &Path) -> FsResult<()>;

    /// Remove a file or symlink. A missing path is `AlreadyAbsent`.
    fn remove_file(&self, path: &Path) -> FsResult<RemoveOutcome>;

    /// Remove a symlink, file, or whole directory tree. A missing path is
    /// `AlreadyAbsent`. A symlink is removed without touching its target.
    fn remove_tree(&self, path: &Path) -> FsResult<RemoveOutcome>;

    /// Copy a file's content and permissions
    fn copy_file(&self, src: &Path, dst: &Path) -> FsResult<()>;

    /// Recursively copy a directory, following symlinks inside it
    fn copy_dir(&self, src: &Path, dst: &Path) -> FsResult<()>;

    /// Create a symlink at `dst` pointing at the file `src`
    fn symlink_file(&self, src: &Path, dst: &Path) -> FsResult<()>;

    /// Create a symlink at `dst` pointing at the directory `src`
    fn symlink_dir(&self, src: &Path, dst: &Path) -> FsResult<()>;
}
