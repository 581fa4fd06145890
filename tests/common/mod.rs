//! Common test utilities for refdeploy CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated project and game directories plus a CLI runner
//! - Assertion macros: `assert_deployed!`, `assert_not_deployed!`

#![allow(dead_code)]

pub mod assertions;
pub mod env;

pub use assertions::*;
pub use env::*;
