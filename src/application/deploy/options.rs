//! Deploy Options
//!
//! Invocation configuration; lives for one run only.

use std::path::PathBuf;

use crate::config::DEFAULT_BINDIR;
use crate::domain::value_objects::DeployMode;

/// Options for the deploy use case
#[derive(Debug, Clone)]
pub struct DeployOptions {
    /// Game installation root (`--gamedir`); required
    pub game_dir: Option<PathBuf>,
    /// Build output directory (`--bindir`)
    pub bin_dir: PathBuf,
    /// Link or copy (`--just_copy`)
    pub mode: DeployMode,
    /// Skip groups marked `test_scripts`
    pub skip_test_scripts: bool,
    /// Plan only; nothing is written and privilege is not required
    pub dry_run: bool,
    /// Directory relative paths are anchored at
    pub cwd: PathBuf,
}

impl DeployOptions {
    pub fn new(game_dir: impl Into<PathBuf>) -> Self {
        Self {
            game_dir: Some(game_dir.into()),
            ..Self::default()
        }
    }

    pub fn with_bin_dir(mut self, bin_dir: impl Into<PathBuf>) -> Self {
        self.bin_dir = bin_dir.into();
        self
    }

    pub fn with_mode(mut self, mode: DeployMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_skip_test_scripts(mut self, skip: bool) -> Self {
        self.skip_test_scripts = skip;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = cwd.into();
        self
    }
}

impl Default for DeployOptions {
    fn default() -> Self {
        Self {
            game_dir: None,
            bin_dir: PathBuf::from(DEFAULT_BINDIR),
            mode: DeployMode::default(),
            skip_test_scripts: false,
            dry_run: false,
            cwd: PathBuf::from("."),
        }
    }
}
