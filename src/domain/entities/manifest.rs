//! Deployment manifest entity
//!
//! A manifest lists the scaffold directories and the groups of files and
//! directories to deploy. The built-in one mirrors the REFramework.NET
//! plugin layout.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::value_objects::{EntryKind, SafePath, SourceRoot};
use crate::error::{DeployError, DeployResult};

/// Source of the built-in manifest
pub const BUILTIN_MANIFEST: &str = include_str!("../../../assets/refdeploy.toml");

/// Label used in errors about the built-in manifest
pub const BUILTIN_MANIFEST_NAME: &str = "<built-in manifest>";

/// A deployment manifest
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Manifest {
    /// Directories (relative to the game dir) created on every run
    #[serde(default)]
    pub scaffold: Vec<PathBuf>,

    /// Entry groups, deployed in order
    #[serde(default, rename = "group")]
    pub groups: Vec<EntryGroup>,
}

/// A set of entries sharing a source root and a destination directory
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EntryGroup {
    pub name: String,

    #[serde(default)]
    pub source_root: SourceRoot,

    /// Destination directory, relative to the game dir
    pub destination: PathBuf,

    /// Skipped with `--skip_test_scripts`
    #[serde(default)]
    pub test_scripts: bool,

    #[serde(default)]
    pub files: Vec<PathBuf>,

    #[serde(default)]
    pub dirs: Vec<PathBuf>,
}

impl EntryGroup {
    /// Files first, then directories, each in manifest order
    pub fn entries(&self) -> impl Iterator<Item = (EntryKind, &Path)> {
        self.files
            .iter()
            .map(|p| (EntryKind::File, p.as_path()))
            .chain(self.dirs.iter().map(|p| (EntryKind::Dir, p.as_path())))
    }

    pub fn entry_count(&self) -> usize {
        self.files.len() + self.dirs.len()
    }

    /// Destination of `source` relative to the game dir
    pub fn destination_for(&self, source: &Path) -> Option<PathBuf> {
        source.file_name().map(|name| self.destination.join(name))
    }
}

impl Manifest {
    /// Parse and validate the embedded manifest
    pub fn builtin() -> DeployResult<Self> {
        let manifest: Manifest =
            toml::from_str(BUILTIN_MANIFEST).map_err(|e| DeployError::InvalidManifest {
                path: PathBuf::from(BUILTIN_MANIFEST_NAME),
                message: e.to_string(),
            })?;
        manifest.validate()?;
        Ok(manifest)
    }

    pub fn entry_count(&self) -> usize {
        self.groups.iter().map(EntryGroup::entry_count).sum()
    }

    pub fn group(&self, name: &str) -> Option<&EntryGroup> {
        self.groups.iter().find(|g| g.name == name)
    }

    /// Check names, destinations and sources.
    ///
    /// No entry may land on, inside, or above another entry or a scaffold
    /// directory: replacing it would wipe what was deployed before.
    pub fn validate(&self) -> DeployResult<()> {
        let mut scaffold = Vec::with_capacity(self.scaffold.len());
        for dir in &self.scaffold {
            let safe = SafePath::new(dir).map_err(|e| DeployError::InvalidEntry {
                group: "scaffold".to_string(),
                entry: dir.display().to_string(),
                reason: e.to_string(),
            })?;
            scaffold.push(safe);
        }

        let mut names = HashSet::new();
        let mut destinations: Vec<(SafePath, &str)> = Vec::new();

        for group in &self.groups {
            if group.name.trim().is_empty() {
                return Err(DeployError::InvalidEntry {
                    group: group.name.clone(),
                    entry: group.destination.display().to_string(),
                    reason: "group name is empty".to_string(),
                });
            }
            if !names.insert(group.name.as_str()) {
                return Err(DeployError::InvalidEntry {
                    group: group.name.clone(),
                    entry: group.name.clone(),
                    reason: "duplicate group name".to_string(),
                });
            }

            SafePath::new(&group.destination).map_err(|e| DeployError::InvalidEntry {
                group: group.name.clone(),
                entry: group.destination.display().to_string(),
                reason: format!("destination {}", e),
            })?;

            for (_, source) in group.entries() {
                let entry = source.display().to_string();
                let invalid = |reason: String| DeployError::InvalidEntry {
                    group: group.name.clone(),
                    entry: entry.clone(),
                    reason,
                };

                if source.as_os_str().is_empty() {
                    return Err(invalid("source path is empty".to_string()));
                }
                let Some(dest) = group.destination_for(source) else {
                    return Err(invalid("source has no file name".to_string()));
                };
                let dest = SafePath::new(&dest).map_err(|e| invalid(e.to_string()))?;

                if let Some(dir) = scaffold
                    .iter()
                    .find(|s| s.as_path().starts_with(dest.as_path()))
                {
                    return Err(invalid(format!(
                        "destination {} would replace scaffold directory {}",
                        dest.as_path().display(),
                        dir.as_path().display()
                    )));
                }
                if let Some((other, other_group)) = destinations.iter().find(|(other, _)| {
                    other.as_path().starts_with(dest.as_path())
                        || dest.as_path().starts_with(other.as_path())
                }) {
                    let reason = if other.as_path() == dest.as_path() {
                        format!(
                            "destination {} already used by group '{}'",
                            dest.as_path().display(),
                            other_group
                        )
                    } else {
                        format!(
                            "destination {} overlaps {} from group '{}'",
                            dest.as_path().display(),
                            other.as_path().display(),
                            other_group
                        )
                    };
                    return Err(invalid(reason));
                }
                destinations.push((dest, group.name.as_str()));
            }
        }

        Ok(())
    }
}
