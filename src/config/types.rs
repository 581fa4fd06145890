//! Configuration type definitions

use std::path::{Path, PathBuf};

use crate::domain::entities::{Manifest, BUILTIN_MANIFEST_NAME};
use crate::domain::value_objects::ConfigWarning;

/// Manifest path from the environment
pub const MANIFEST_ENV_VAR: &str = "REFDEPLOY_MANIFEST";

/// Log filter directives (`tracing_subscriber::EnvFilter` syntax)
pub const LOG_ENV_VAR: &str = "REFDEPLOY_LOG";

/// Manifest picked up from the working directory when nothing else is given
pub const PROJECT_MANIFEST_FILE: &str = "refdeploy.toml";

/// Default `--bindir`
pub const DEFAULT_BINDIR: &str = "build/bin";

/// Where the manifest came from, highest priority first
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestSource {
    /// `--manifest <path>`
    Flag(PathBuf),
    /// `REFDEPLOY_MANIFEST`
    Env(PathBuf),
    /// `./refdeploy.toml`
    Project(PathBuf),
    /// Embedded default
    Builtin,
}

impl ManifestSource {
    pub fn path(&self) -> Option<&Path> {
        match self {
            ManifestSource::Flag(p) | ManifestSource::Env(p) | ManifestSource::Project(p) => {
                Some(p)
            }
            ManifestSource::Builtin => None,
        }
    }
}

impl std::fmt::Display for ManifestSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ManifestSource::Flag(p) => write!(f, "{} (--manifest)", p.display()),
            ManifestSource::Env(p) => write!(f, "{} ({})", p.display(), MANIFEST_ENV_VAR),
            ManifestSource::Project(p) => write!(f, "{}", p.display()),
            ManifestSource::Builtin => write!(f, "{}", BUILTIN_MANIFEST_NAME),
        }
    }
}

/// A parsed, validated manifest plus what loading it noticed
#[derive(Debug, Clone)]
pub struct LoadedManifest {
    pub manifest: Manifest,
    pub source: ManifestSource,
    pub warnings: Vec<ConfigWarning>,
}
