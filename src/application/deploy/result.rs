//! Deploy Result
//!
//! What a deploy run did.

use std::path::PathBuf;

use crate::domain::value_objects::{DeployMode, EntryKind};

/// One deployed entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployedEntry {
    pub group: String,
    pub kind: EntryKind,
    pub source: PathBuf,
    pub destination: PathBuf,
    /// Something was at the destination before this run
    pub replaced: bool,
}

/// Result of a deploy run
#[derive(Debug, Clone, Default)]
pub struct DeployReport {
    pub mode: DeployMode,
    /// Scaffold directories that exist after the run
    pub scaffold: Vec<PathBuf>,
    pub deployed: Vec<DeployedEntry>,
    pub skipped_groups: Vec<String>,
}

impl DeployReport {
    pub fn new(mode: DeployMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn deployed_count(&self) -> usize {
        self.deployed.len()
    }

    pub fn replaced_count(&self) -> usize {
        self.deployed.iter().filter(|e| e.replaced).count()
    }
}
