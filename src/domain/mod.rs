//! Domain Layer
//!
//! Manifest model and the ports the deploy use case talks through.
//!
//! ## Structure
//!
//! - `entities/` - The deployment manifest
//! - `value_objects/` - Immutable value types (DeployMode, EntryKind, SafePath)
//! - `ports/` - Interface definitions for infrastructure
//!
//! This layer never touches the file system directly; all I/O goes
//! through the `ports` traits.

pub mod entities;
pub mod ports;
pub mod value_objects;
