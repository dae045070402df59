//! Compile one HLSL source file into the requested target format

use std::process::ExitCode;
use shader_forge_cli::CliMode;

fn main() -> ExitCode {
    shader_forge_cli::run(CliMode::SingleFile)
}
