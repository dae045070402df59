/// Executor trait: the only effectful step of a batch run

use crate::error::Result;
use super::Invocation;

/// Runs one planned invocation to completion
///
/// Implemented by backend plugins (e.g., `ProcessExecutor` in `shader_forge_process`).
/// Implementations block until the backend has exited; there is no timeout.
pub trait Executor: Send + Sync {
    /// Run the invocation and return its exit code
    ///
    /// A backend that ran but exited without a code (killed by a signal) is
    /// reported as [`SPAWN_FAILURE_EXIT_CODE`](super::SPAWN_FAILURE_EXIT_CODE).
    ///
    /// # Errors
    ///
    /// `BackendSpawnFailed` if the process could not be started.
    fn execute(&self, invocation: &Invocation) -> Result<i32>;
}
