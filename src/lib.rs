//! refdeploy - deploy REFramework.NET build output into a game directory
//!
//! Symlinks (or copies) the plugin binaries, their managed dependencies and
//! the C# test scripts into `<gamedir>/reframework/plugins`, driven by a
//! TOML manifest with a built-in default.
//!
//! ## Layers
//!
//! - `domain` - Manifest model, value objects and ports
//! - `application` - The deploy use case
//! - `infrastructure` - Local disk, NDJSON events, privilege detection
//! - `config` - Manifest discovery and loading
//! - `presentation` - CLI flags, wiring and text output

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{DeployOptions, DeployPlan, DeployReport, DeployUseCase};
pub use domain::entities::{EntryGroup, Manifest};
pub use domain::value_objects::{absolutize, DeployMode, EntryKind, SafePath, SourceRoot};
pub use error::{DeployError, DeployResult};
