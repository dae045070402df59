//! Compile every vertex/pixel HLSL source under a directory

use std::process::ExitCode;
use shader_forge_cli::CliMode;

fn main() -> ExitCode {
    shader_forge_cli::run(CliMode::Directory)
}
