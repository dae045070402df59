/*!
# Shader Forge - Process Backend

Runs planned backend invocations as child processes.

This crate provides [`ProcessExecutor`], the `Executor` implementation used by
the command-line tools. Each invocation is spawned with `std::process::Command`
and waited on synchronously.
*/

mod process_executor;

pub use process_executor::{ProcessExecutor, ProcessExecutorConfig};
