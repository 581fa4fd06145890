//! Deploy Use Case
//!
//! Orchestrates a deploy run:
//! 1. Validate inputs (game dir given, privilege, build dir present)
//! 2. Resolve the manifest into a plan
//! 3. Ensure scaffold directories
//! 4. Replace every planned entry with a symlink or a copy
//!
//! Nothing is written before validation passes. A failure part-way
//! through leaves earlier entries deployed.

use std::path::PathBuf;

use crate::domain::entities::Manifest;
use crate::domain::ports::{
    DeployEvent, DeployEventSink, FileSystem, NoopEventSink, PrivilegeProbe, RemoveOutcome,
};
use crate::domain::value_objects::{absolutize, DeployMode, EntryKind};
use crate::error::{DeployError, DeployResult};

use super::options::DeployOptions;
use super::plan::{DeployPlan, PlannedEntry};
use super::result::{DeployReport, DeployedEntry};

/// Deploy use case, parameterized by its ports
pub struct DeployUseCase<FS, P>
where
    FS: FileSystem,
    P: PrivilegeProbe,
{
    file_system: FS,
    privilege: P,
}

impl<FS, P> DeployUseCase<FS, P>
where
    FS: FileSystem,
    P: PrivilegeProbe,
{
    pub fn new(file_system: FS, privilege: P) -> Self {
        Self {
            file_system,
            privilege,
        }
    }

    pub fn file_system(&self) -> &FS {
        &self.file_system
    }

    /// Check the inputs; returns the game directory.
    ///
    /// Order matters for the message the user sees: missing `--gamedir`
    /// first, then privilege, then the build directory.
    pub fn validate(&self, options: &DeployOptions) -> DeployResult<PathBuf> {
        let game_dir = options
            .game_dir
            .clone()
            .ok_or(DeployError::MissingGameDir)?;

        if options.mode.is_link() && !options.dry_run {
            if !self.privilege.has_elevated_privilege() {
                return Err(DeployError::NotElevated);
            }
            if !self.privilege.supports_symlinks() {
                return Err(DeployError::SymlinksUnsupported);
            }
        }

        let bin_dir = absolutize(&options.bin_dir, &options.cwd);
        if !self.file_system.exists(&bin_dir) {
            return Err(DeployError::BinDirNotFound {
                path: options.bin_dir.clone(),
            });
        }

        Ok(game_dir)
    }

    /// Validate, then resolve the manifest
    pub fn plan(&self, manifest: &Manifest, options: &DeployOptions) -> DeployResult<DeployPlan> {
        let game_dir = self.validate(options)?;
        Ok(DeployPlan::build(
            manifest,
            &game_dir,
            &options.bin_dir,
            &options.cwd,
            options.mode,
            options.skip_test_scripts,
        ))
    }

    /// Validate, plan and execute without events
    pub fn run(&self, manifest: &Manifest, options: &DeployOptions) -> DeployResult<DeployReport> {
        let plan = self.plan(manifest, options)?;
        self.execute(&plan, &NoopEventSink)
    }

    /// Apply a plan
    pub fn execute(
        &self,
        plan: &DeployPlan,
        events: &dyn DeployEventSink,
    ) -> DeployResult<DeployReport> {
        let mut report = DeployReport::new(plan.mode);

        events.on_event(DeployEvent::Started {
            game_dir: plan.game_dir.clone(),
            mode: plan.mode,
            entry_count: plan.entry_count(),
        });

        for dir in &plan.scaffold {
            self.file_system.create_dir_all(dir)?;
            tracing::debug!(path = %dir.display(), "scaffold ready");
            events.on_event(DeployEvent::ScaffoldEnsured { path: dir.clone() });
            report.scaffold.push(dir.clone());
        }

        for group in &plan.skipped_groups {
            tracing::info!(group = %group, "skipping group");
            events.on_event(DeployEvent::GroupSkipped {
                group: group.clone(),
            });
            report.skipped_groups.push(group.clone());
        }

        for (index, entry) in plan.entries.iter().enumerate() {
            let deployed = self.deploy_entry(entry, plan.mode, events)?;
            events.on_event(DeployEvent::EntryDeployed {
                index,
                group: deployed.group.clone(),
                kind: deployed.kind,
                source: deployed.source.clone(),
                destination: deployed.destination.clone(),
                replaced: deployed.replaced,
            });
            report.deployed.push(deployed);
        }

        tracing::info!(
            mode = %plan.mode,
            deployed = report.deployed_count(),
            replaced = report.replaced_count(),
            "deploy finished"
        );
        events.on_event(DeployEvent::Completed {
            deployed_count: report.deployed_count(),
            replaced_count: report.replaced_count(),
            skipped_groups: report.skipped_groups.len(),
        });

        Ok(report)
    }

    fn deploy_entry(
        &self,
        entry: &PlannedEntry,
        mode: DeployMode,
        events: &dyn DeployEventSink,
    ) -> DeployResult<DeployedEntry> {
        let fs = &self.file_system;
        let PlannedEntry {
            group,
            kind,
            source,
            destination,
        } = entry;

        if let Some(parent) = destination.parent() {
            fs.create_dir_all(parent)?;
        }

        let removed = match kind {
            EntryKind::File => fs.remove_file(destination)?,
            EntryKind::Dir => fs.remove_tree(destination)?,
        };

        match (mode, kind) {
            (DeployMode::Copy, EntryKind::File) => fs.copy_file(source, destination)?,
            (DeployMode::Copy, EntryKind::Dir) => fs.copy_dir(source, destination)?,
            (DeployMode::Link, _) => {
                if !fs.exists(source) {
                    tracing::warn!(source = %source.display(), "linking to a missing source");
                    events.on_event(DeployEvent::DanglingSource {
                        source: source.clone(),
                    });
                }
                match kind {
                    EntryKind::File => fs.symlink_file(source, destination)?,
                    EntryKind::Dir => fs.symlink_dir(source, destination)?,
                }
            }
        }

        tracing::debug!(
            group = %group,
            kind = %kind,
            source = %source.display(),
            destination = %destination.display(),
            replaced = removed == RemoveOutcome::Removed,
            "{}",
            mode.verb()
        );

        Ok(DeployedEntry {
            group: group.clone(),
            kind: *kind,
            source: source.clone(),
            destination: destination.clone(),
            replaced: removed.was_removed(),
        })
    }
}
