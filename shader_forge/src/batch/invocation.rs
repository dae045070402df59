/// Planned backend invocations and their outcomes

use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;
use crate::source::SourceFile;
use crate::stage::Stage;

/// Exit code recorded when a backend could not be spawned or exited without a code
pub const SPAWN_FAILURE_EXIT_CODE: i32 = -1;

/// Pure description of one backend call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub source_file: SourceFile,
    pub stage: Stage,
    /// Backend executable
    pub program: PathBuf,
    pub args: Vec<OsString>,
    /// Artifact the backend is expected to write
    pub output_path: PathBuf,
}

impl Invocation {
    /// Shell-like rendering for logs and dry runs
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_os_str())
            .chain(self.args.iter().map(|a| a.as_os_str()))
            .map(|part| {
                let part = part.to_string_lossy();
                if part.is_empty() || part.contains(char::is_whitespace) {
                    format!("\"{}\"", part)
                } else {
                    part.into_owned()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.command_line())
    }
}

/// Terminal state of one (source file, stage) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationResult {
    pub source_file: SourceFile,
    pub stage: Stage,
    pub output_path: PathBuf,
    pub exit_code: i32,
    pub succeeded: bool,
}

impl InvocationResult {
    /// Outcome of a process that ran to completion
    pub fn from_exit_code(invocation: &Invocation, exit_code: i32) -> Self {
        Self {
            source_file: invocation.source_file.clone(),
            stage: invocation.stage,
            output_path: invocation.output_path.clone(),
            exit_code,
            succeeded: exit_code == 0,
        }
    }

    /// Outcome of a process that could not be spawned
    pub fn spawn_failed(invocation: &Invocation) -> Self {
        Self::from_exit_code(invocation, SPAWN_FAILURE_EXIT_CODE)
    }
}
