//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.

use crate::application::DeployUseCase;
use crate::infrastructure::{LocalFs, ProcessPrivilege};

/// The deploy use case against the local disk and the running process
pub type ConcreteDeployUseCase = DeployUseCase<LocalFs, ProcessPrivilege>;

/// Create a deploy use case with all dependencies wired up
pub fn create_deploy_use_case() -> ConcreteDeployUseCase {
    DeployUseCase::new(LocalFs::new(), ProcessPrivilege)
}
