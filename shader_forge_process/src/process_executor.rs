/// ProcessExecutor - spawns backend compilers as child processes

use std::process::{Command, ExitStatus, Stdio};
use shader_forge::forge::{Error, Executor, Invocation, Result, SPAWN_FAILURE_EXIT_CODE};
use shader_forge::{forge_debug, forge_trace, forge_warn};

const LOG_SOURCE: &str = "forge::process";

/// Process executor configuration
#[derive(Debug, Clone, Default)]
pub struct ProcessExecutorConfig {
    /// Capture backend stdout/stderr and forward them to the log instead of
    /// letting the backend write to the console
    pub capture_output: bool,
}

/// Executor spawning one synchronous child process per invocation
///
/// There is no timeout: a hung backend hangs the run.
#[derive(Debug, Clone, Default)]
pub struct ProcessExecutor {
    config: ProcessExecutorConfig,
}

impl ProcessExecutor {
    pub fn new(config: ProcessExecutorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProcessExecutorConfig {
        &self.config
    }

    fn command(invocation: &Invocation) -> Command {
        let mut command = Command::new(&invocation.program);
        command.args(&invocation.args);
        command
    }

    fn spawn_error(invocation: &Invocation, e: std::io::Error) -> Error {
        forge_warn!(LOG_SOURCE, "Cannot spawn {}: {}", invocation.program.display(), e);
        Error::BackendSpawnFailed {
            program: invocation.program.clone(),
            reason: e.to_string(),
        }
    }

    fn run_inherited(&self, invocation: &Invocation) -> Result<ExitStatus> {
        Self::command(invocation)
            .status()
            .map_err(|e| Self::spawn_error(invocation, e))
    }

    fn run_captured(&self, invocation: &Invocation) -> Result<ExitStatus> {
        let output = Self::command(invocation)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| Self::spawn_error(invocation, e))?;

        let name = invocation.source_file.path.display();
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);

        for line in stdout.lines().filter(|l| !l.trim().is_empty()) {
            forge_trace!(LOG_SOURCE, "{} [{}]: {}", name, invocation.stage.tag, line);
        }
        for line in stderr.lines().filter(|l| !l.trim().is_empty()) {
            if output.status.success() {
                forge_debug!(LOG_SOURCE, "{} [{}]: {}", name, invocation.stage.tag, line);
            } else {
                forge_warn!(LOG_SOURCE, "{} [{}]: {}", name, invocation.stage.tag, line);
            }
        }

        Ok(output.status)
    }
}

impl Executor for ProcessExecutor {
    fn execute(&self, invocation: &Invocation) -> Result<i32> {
        let status = if self.config.capture_output {
            self.run_captured(invocation)?
        } else {
            self.run_inherited(invocation)?
        };

        match status.code() {
            Some(code) => Ok(code),
            None => {
                forge_warn!(LOG_SOURCE, "{} terminated without an exit code ({})",
                    invocation.program.display(), status);
                Ok(SPAWN_FAILURE_EXIT_CODE)
            }
        }
    }
}

#[cfg(test)]
#[path = "process_executor_tests.rs"]
mod tests;
