//! Domain Entities

mod manifest;

pub use manifest::{EntryGroup, Manifest, BUILTIN_MANIFEST, BUILTIN_MANIFEST_NAME};
