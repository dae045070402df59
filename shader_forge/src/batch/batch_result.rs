/// Aggregated outcome of a batch run

use crate::error::{Error, Result};
use super::InvocationResult;

/// Ordered results, one per (source file, stage) pair
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchResult {
    results: Vec<InvocationResult>,
}

impl BatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, result: InvocationResult) {
        self.results.push(result);
    }

    /// Results in execution order
    pub fn results(&self) -> &[InvocationResult] {
        &self.results
    }

    pub fn iter(&self) -> std::slice::Iter<'_, InvocationResult> {
        self.results.iter()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn succeeded_count(&self) -> usize {
        self.results.iter().filter(|r| r.succeeded).count()
    }

    pub fn failed_count(&self) -> usize {
        self.len() - self.succeeded_count()
    }

    /// Failed results in execution order
    pub fn failures(&self) -> impl Iterator<Item = &InvocationResult> {
        self.results.iter().filter(|r| !r.succeeded)
    }

    /// True when every invocation succeeded (vacuously true when empty)
    pub fn all_succeeded(&self) -> bool {
        self.results.iter().all(|r| r.succeeded)
    }

    /// `BatchFailed` if any invocation failed
    pub fn into_result(self) -> Result<Self> {
        let failed = self.failed_count();
        if failed > 0 {
            return Err(Error::BatchFailed { failed, total: self.len() });
        }
        Ok(self)
    }
}
