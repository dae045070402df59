/// Wiring between parsed arguments, the batch driver and the process backend

use std::process::ExitCode;
use std::sync::Arc;
use colored::Colorize;
use shader_forge::forge::{BatchDriver, Error, Forge, Result};
use shader_forge::forge::target::{BackendConfig, BackendRegistry};
use shader_forge::{forge_info, forge_warn};
use shader_forge_process::{ProcessExecutor, ProcessExecutorConfig};
use crate::args::{parse_args, usage, CliMode, CliRequest, ParsedArgs};

const LOG_SOURCE: &str = "forge::cli";

/// Process exit code for an error
///
/// 2 when backends ran and some failed, 1 for every usage or configuration error.
pub fn exit_code_for(error: &Error) -> u8 {
    match error {
        Error::BatchFailed { .. } => 2,
        _ => 1,
    }
}

/// Backend locations: defaults next to the executable, then CLI overrides
fn backend_config(request: &CliRequest) -> Result<BackendConfig> {
    let mut config = BackendConfig::from_current_exe()?;
    if let Some(path) = &request.options.cross_compiler {
        config = config.with_cross_compiler(path);
    }
    if let Some(path) = &request.options.platform_compiler {
        config = config.with_platform_compiler(path);
    }
    Ok(config)
}

/// Execute a parsed request
///
/// # Errors
///
/// Configuration errors from the driver, or `BatchFailed` when at least one
/// backend invocation failed.
pub fn run_request(request: &CliRequest) -> Result<()> {
    Forge::set_min_severity(request.options.log_level);

    let executor = ProcessExecutor::new(ProcessExecutorConfig {
        capture_output: request.options.capture_output,
    });
    let driver = BatchDriver::new(
        BackendRegistry::new(&backend_config(request)?),
        Arc::new(executor),
    );

    if request.options.dry_run {
        let plan = driver.prepare(&request.batch)?;
        for invocation in &plan {
            println!("{}", invocation);
        }
        forge_info!(LOG_SOURCE, "Dry run: {} invocation(s) planned", plan.len());
        return Ok(());
    }

    let result = driver.run(&request.batch)?;
    for failure in result.failures() {
        forge_warn!(LOG_SOURCE, "FAILED {} [{}] (exit code {})",
            failure.source_file.path.display(), failure.stage.tag, failure.exit_code);
    }
    result.into_result().map(|_| ())
}

/// Entry point shared by both binaries
pub fn run(mode: CliMode) -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let request = match parse_args(mode, &args) {
        Ok(ParsedArgs::Help) => {
            println!("{}", usage(mode));
            return ExitCode::SUCCESS;
        }
        Ok(ParsedArgs::Run(request)) => request,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            if matches!(e, Error::UsageError(_)) {
                eprintln!("{}", usage(mode));
            }
            return ExitCode::from(exit_code_for(&e));
        }
    };

    match run_request(&request) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}: {}", "error:".red().bold(), mode.program_name(), e);
            ExitCode::from(exit_code_for(&e))
        }
    }
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
