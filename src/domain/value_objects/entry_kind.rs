//! Shape of a deployment entry and where its source is anchored

use serde::Deserialize;

/// File or directory entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Dir,
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryKind::File => write!(f, "file"),
            EntryKind::Dir => write!(f, "dir"),
        }
    }
}

/// Directory a group's relative source paths are resolved against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SourceRoot {
    /// The invocation's working directory
    #[default]
    Cwd,
    /// The build output directory (`--bindir`)
    Bindir,
}

impl std::fmt::Display for SourceRoot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceRoot::Cwd => write!(f, "cwd"),
            SourceRoot::Bindir => write!(f, "bindir"),
        }
    }
}
