//! Deploy Module
//!
//! Orchestrates a deploy run.
//!
//! ## Structure
//!
//! - `options` - Invocation configuration (`DeployOptions`)
//! - `plan` - Manifest + options resolved to absolute paths (`DeployPlan`)
//! - `result` - What a run did (`DeployReport`)
//! - `use_case` - Validation and execution (`DeployUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use refdeploy::application::deploy::{DeployOptions, DeployUseCase};
//!
//! let use_case = DeployUseCase::new(LocalFs::new(), ProcessPrivilege);
//! let plan = use_case.plan(&manifest, &DeployOptions::new("C:/Games/RE9"))?;
//! let report = use_case.execute(&plan, &NoopEventSink)?;
//! ```

mod options;
mod plan;
mod result;
mod use_case;

pub use options::DeployOptions;
pub use plan::{DeployPlan, PlannedEntry};
pub use result::{DeployReport, DeployedEntry};
pub use use_case::DeployUseCase;
