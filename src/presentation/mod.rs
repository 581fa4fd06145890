//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - Human-readable output (NDJSON is an infrastructure sink)
//!
//! ## Structure
//!
//! - `cli` - Flag definitions
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `output` - Themes, the text event sink and plan/summary rendering
//!
//! ## Usage
//!
//! ```ignore
//! use refdeploy::presentation::factory;
//!
//! let use_case = factory::create_deploy_use_case();
//! let report = use_case.run(&manifest, &options)?;
//! ```

pub mod cli;
pub mod factory;
pub mod output;

pub use factory::{create_deploy_use_case, ConcreteDeployUseCase};
pub use output::{
    render_plan, render_success, render_summary, render_warnings, TextEventSink, Theme,
};
