/*!
# Shader Forge - Command Line

Front-end shared by the `build_shader` (single file) and `build_shaders`
(directory) binaries: argument parsing into a validated BatchConfig, then a
batch run with the process backend.
*/

mod args;
mod app;

#[cfg(test)]
#[path = "../tests/common/scratch_dir.rs"]
mod scratch_dir;

pub use args::{parse_args, usage, CliMode, CliOptions, CliRequest, ParsedArgs};
pub use app::{exit_code_for, run, run_request};
