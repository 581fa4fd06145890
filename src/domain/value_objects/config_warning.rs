//! Manifest warning value object.

use std::path::PathBuf;

/// Non-fatal manifest warning surfaced to CLI users (unknown keys).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// The unknown key (last segment)
    pub key: String,
    /// Full dotted path as reported by the deserializer, e.g. `group.0.dest`
    pub key_path: String,
    /// The manifest file
    pub file: PathBuf,
    /// 1-indexed line of the first occurrence, if found
    pub line: Option<usize>,
    /// Closest known key, if any is close enough
    pub suggestion: Option<String>,
}
