//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Flags keep their snake_case spelling (`--just_copy`); kebab-case
//!   spellings are accepted as aliases
//! - A missing `--gamedir` is not a clap error: the deploy validation
//!   reports it with the usage line and exit status 1

use std::path::PathBuf;

use clap::Parser;

use crate::application::DeployOptions;
use crate::config::DEFAULT_BINDIR;
use crate::domain::value_objects::DeployMode;

/// refdeploy - deploy REFramework.NET build output into a game directory
#[derive(Parser, Debug)]
#[command(name = "refdeploy")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Game installation root
    #[arg(long)]
    pub gamedir: Option<PathBuf>,

    /// Directory holding the built artifacts
    #[arg(long, default_value = DEFAULT_BINDIR)]
    pub bindir: PathBuf,

    /// Copy instead of symlinking (no elevated privilege needed)
    #[arg(long = "just_copy", alias = "just-copy")]
    pub just_copy: bool,

    /// Do not deploy the test script sources
    #[arg(long = "skip_test_scripts", alias = "skip-test-scripts")]
    pub skip_test_scripts: bool,

    /// Manifest to deploy (default: $REFDEPLOY_MANIFEST, ./refdeploy.toml, built-in)
    #[arg(long)]
    pub manifest: Option<PathBuf>,

    /// Print the plan without writing anything
    #[arg(long = "dry_run", alias = "dry-run")]
    pub dry_run: bool,

    /// NDJSON events on stdout
    #[arg(long)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn mode(&self) -> DeployMode {
        DeployMode::from_just_copy(self.just_copy)
    }

    /// Deploy options anchored at `cwd`
    pub fn deploy_options(&self, cwd: PathBuf) -> DeployOptions {
        DeployOptions {
            game_dir: self.gamedir.clone(),
            ..DeployOptions::default()
        }
        .with_bin_dir(self.bindir.clone())
        .with_mode(self.mode())
        .with_skip_test_scripts(self.skip_test_scripts)
        .with_dry_run(self.dry_run)
        .with_cwd(cwd)
    }
}
