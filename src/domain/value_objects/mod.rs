//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod config_warning;
mod deploy_mode;
mod entry_kind;
mod path;

pub use config_warning::ConfigWarning;
pub use deploy_mode::DeployMode;
pub use entry_kind::{EntryKind, SourceRoot};
pub use path::{absolutize, PathError, SafePath};
