//! Deploy plan
//!
//! The manifest with every path resolved. Building a plan never touches
//! the file system.

use std::path::{Path, PathBuf};

use crate::domain::entities::Manifest;
use crate::domain::value_objects::{absolutize, DeployMode, EntryKind, SourceRoot};

/// One entry with absolute source and destination
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedEntry {
    pub group: String,
    pub kind: EntryKind,
    pub source: PathBuf,
    pub destination: PathBuf,
}

/// Everything a run will do, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployPlan {
    pub game_dir: PathBuf,
    pub bin_dir: PathBuf,
    pub cwd: PathBuf,
    pub mode: DeployMode,
    /// Absolute scaffold directories
    pub scaffold: Vec<PathBuf>,
    pub entries: Vec<PlannedEntry>,
    pub skipped_groups: Vec<String>,
}

impl DeployPlan {
    /// Resolve `manifest` against the given roots.
    ///
    /// `game_dir` and `bin_dir` may be relative; they are anchored at `cwd`.
    pub fn build(
        manifest: &Manifest,
        game_dir: &Path,
        bin_dir: &Path,
        cwd: &Path,
        mode: DeployMode,
        skip_test_scripts: bool,
    ) -> Self {
        let game_dir = absolutize(game_dir, cwd);
        let bin_dir = absolutize(bin_dir, cwd);

        let scaffold = manifest
            .scaffold
            .iter()
            .map(|dir| game_dir.join(dir))
            .collect();

        let mut entries = Vec::with_capacity(manifest.entry_count());
        let mut skipped_groups = Vec::new();

        for group in &manifest.groups {
            if skip_test_scripts && group.test_scripts {
                skipped_groups.push(group.name.clone());
                continue;
            }

            let root = match group.source_root {
                SourceRoot::Cwd => cwd,
                SourceRoot::Bindir => bin_dir.as_path(),
            };

            for (kind, source) in group.entries() {
                // Manifest validation guarantees a file name
                let Some(relative_dest) = group.destination_for(source) else {
                    continue;
                };
                entries.push(PlannedEntry {
                    group: group.name.clone(),
                    kind,
                    source: absolutize(source, root),
                    destination: game_dir.join(relative_dest),
                });
            }
        }

        Self {
            game_dir,
            bin_dir,
            cwd: cwd.to_path_buf(),
            mode,
            scaffold,
            entries,
            skipped_groups,
        }
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Entries of one group, in order
    pub fn group_entries<'a>(&'a self, group: &'a str) -> impl Iterator<Item = &'a PlannedEntry> {
        self.entries.iter().filter(move |e| e.group == group)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builtin() -> Manifest {
        Manifest::builtin().unwrap()
    }

    #[cfg(unix)]
    #[test]
    fn plan_resolves_bindir_sources() {
        let plan = DeployPlan::build(
            &builtin(),
            Path::new("/games/re9"),
            Path::new("build/bin"),
            Path::new("/src/REFramework/csharp-api"),
            DeployMode::Link,
            false,
        );

        let ijwhost = plan
            .entries
            .iter()
            .find(|e| e.destination.ends_with("Ijwhost.dll"))
            .unwrap();
        assert_eq!(
            ijwhost.source,
            PathBuf::from("/src/REFramework/csharp-api/build/bin/Ijwhost.dll")
        );
        assert_eq!(
            ijwhost.destination,
            PathBuf::from("/games/re9/reframework/plugins/Ijwhost.dll")
        );
    }

    #[cfg(unix)]
    #[test]
    fn plan_resolves_cwd_sources_by_basename() {
        let plan = DeployPlan::build(
            &builtin(),
            Path::new("game"),
            Path::new("build/bin"),
            Path::new("/work"),
            DeployMode::Copy,
            false,
        );

        let web = plan
            .group_entries("test-scripts")
            .find(|e| e.kind == EntryKind::Dir)
            .unwrap();
        assert_eq!(web.source, PathBuf::from("/work/Test/Test/WebAPI"));
        assert_eq!(
            web.destination,
            PathBuf::from("/work/game/reframework/plugins/source/WebAPI")
        );
        assert_eq!(
            plan.scaffold,
            vec![PathBuf::from("/work/game/reframework/plugins/source")]
        );
    }

    #[test]
    fn plan_keeps_manifest_order() {
        let cwd = std::env::temp_dir();
        let plan = DeployPlan::build(
            &builtin(),
            Path::new("game"),
            Path::new("build/bin"),
            &cwd,
            DeployMode::Link,
            false,
        );

        let groups: Vec<_> = plan.entries.iter().map(|e| e.group.as_str()).collect();
        let first_plugin = groups.iter().position(|g| *g == "plugins").unwrap();
        let first_dep = groups.iter().position(|g| *g == "dependencies").unwrap();
        assert_eq!(groups[0], "test-scripts");
        assert!(first_plugin < first_dep);
        assert_eq!(plan.entry_count(), 22);
        assert!(plan.skipped_groups.is_empty());
    }

    #[test]
    fn plan_skips_test_script_groups() {
        let cwd = std::env::temp_dir();
        let plan = DeployPlan::build(
            &builtin(),
            Path::new("game"),
            Path::new("build/bin"),
            &cwd,
            DeployMode::Link,
            true,
        );

        assert_eq!(plan.skipped_groups, vec!["test-scripts".to_string()]);
        assert_eq!(plan.group_entries("test-scripts").count(), 0);
        assert_eq!(plan.entry_count(), 14);
        // The scaffold is created even when scripts are skipped
        assert_eq!(plan.scaffold.len(), 1);
    }
}
