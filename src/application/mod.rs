//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, value objects, ports)
//! - Does NOT touch the disk directly (that goes through ports)
//!
//! ## Use Cases
//!
//! - `DeployUseCase` - Validates inputs, plans and executes a deploy

pub mod deploy;

pub use deploy::{
    DeployOptions, DeployPlan, DeployReport, DeployUseCase, DeployedEntry, PlannedEntry,
};
