/// Mock executor for testing without spawning processes
///
/// Records every invocation it receives and replays scripted outcomes.

use std::collections::HashMap;
use std::sync::Mutex;
use std::path::PathBuf;
use crate::error::{Error, Result};
use super::{Executor, Invocation};

/// Scripted outcome for one output path
#[derive(Debug, Clone)]
pub enum MockOutcome {
    Exit(i32),
    SpawnFailure,
}

/// Executor that never spawns anything
///
/// Every invocation exits with 0 unless an outcome was scripted for its output path.
#[derive(Debug, Default)]
pub struct MockExecutor {
    pub executed: Mutex<Vec<Invocation>>,
    outcomes: HashMap<PathBuf, MockOutcome>,
}

impl MockExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the outcome of the invocation writing `output_path`
    pub fn with_outcome(mut self, output_path: impl Into<PathBuf>, outcome: MockOutcome) -> Self {
        self.outcomes.insert(output_path.into(), outcome);
        self
    }

    pub fn executed_count(&self) -> usize {
        self.executed.lock().unwrap().len()
    }

    pub fn executed_outputs(&self) -> Vec<PathBuf> {
        self.executed.lock().unwrap().iter().map(|i| i.output_path.clone()).collect()
    }
}

impl Executor for MockExecutor {
    fn execute(&self, invocation: &Invocation) -> Result<i32> {
        self.executed.lock().unwrap().push(invocation.clone());
        match self.outcomes.get(&invocation.output_path) {
            None => Ok(0),
            Some(MockOutcome::Exit(code)) => Ok(*code),
            Some(MockOutcome::SpawnFailure) => Err(Error::BackendSpawnFailed {
                program: invocation.program.clone(),
                reason: "mock spawn failure".to_string(),
            }),
        }
    }
}
