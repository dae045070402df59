//! Batch module
//!
//! Planning, execution and aggregation of backend invocations for a whole
//! batch run.

mod batch_config;
mod invocation;
mod executor;
mod batch_result;
mod batch_driver;
#[cfg(test)]
pub(crate) mod mock_executor;

pub use batch_config::BatchConfig;
pub use invocation::{Invocation, InvocationResult, SPAWN_FAILURE_EXIT_CODE};
pub use executor::Executor;
pub use batch_result::BatchResult;
pub use batch_driver::BatchDriver;
