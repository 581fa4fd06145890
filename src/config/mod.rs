//! Configuration module for refdeploy
//!
//! Manifest resolution order:
//! 1. `--manifest` flag (highest priority)
//! 2. `REFDEPLOY_MANIFEST` environment variable
//! 3. Project manifest (`./refdeploy.toml`)
//! 4. Built-in manifest (lowest priority)

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::{
    load_manifest, load_with_warnings, parse_with_warnings, resolve_manifest_source,
    resolve_manifest_source_with,
};
pub use types::{
    LoadedManifest, ManifestSource, DEFAULT_BINDIR, LOG_ENV_VAR, MANIFEST_ENV_VAR,
    PROJECT_MANIFEST_FILE,
};
