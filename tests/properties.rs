//! Property tests for refdeploy.
//!
//! Properties use randomized input generation to explore edge cases and
//! protect invariants like "never panics" and "always absolute".
//!
//! Run with: `cargo test --test properties`

#[path = "properties/path_handling.rs"]
mod path_handling;

#[path = "properties/planning.rs"]
mod planning;
