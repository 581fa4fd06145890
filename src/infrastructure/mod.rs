//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local disk implementation of `FileSystem`
//! - `events/` - NDJSON event sink
//! - `platform` - Process privilege detection

pub mod events;
pub mod fs;
pub mod platform;

pub use events::JsonEventSink;
pub use fs::LocalFs;
pub use platform::{has_elevated_privilege, ProcessPrivilege};
