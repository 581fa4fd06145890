//! Error types for refdeploy
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::file_system::FsError;

/// Result type alias for refdeploy operations
pub type DeployResult<T> = Result<T, DeployError>;

/// Main error type for refdeploy operations
#[derive(Error, Debug)]
pub enum DeployError {
    /// `--gamedir` was not supplied
    #[error("Usage: refdeploy --gamedir=<path to game directory>")]
    MissingGameDir,

    /// Link mode requires an elevated process
    #[error("This tool must be run as an administrator (or pass --just_copy)")]
    NotElevated,

    /// Build output directory is missing
    #[error("Directory {} does not exist", path.display())]
    BinDirNotFound { path: PathBuf },

    /// Link mode on a platform without native symlinks
    #[error("symlinks are not supported on this platform; rerun with --just_copy")]
    SymlinksUnsupported,

    /// Manifest could not be read or parsed
    #[error("invalid manifest {}: {message}", path.display())]
    InvalidManifest { path: PathBuf, message: String },

    /// Manifest parsed but describes an unusable entry
    #[error("invalid manifest entry '{entry}' in group '{group}': {reason}")]
    InvalidEntry {
        group: String,
        entry: String,
        reason: String,
    },

    /// File system operation failed
    #[error(transparent)]
    Fs(#[from] FsError),
}

impl DeployError {
    /// Validation failures are reported without an error chain.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            DeployError::MissingGameDir
                | DeployError::NotElevated
                | DeployError::BinDirNotFound { .. }
                | DeployError::SymlinksUnsupported
        )
    }
}
