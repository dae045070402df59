/// Batch driver
///
/// Turns a BatchConfig into an ordered list of backend invocations and runs
/// them one at a time. A failing invocation never stops the batch: every
/// (source file, stage) pair is attempted and recorded.

use std::fs;
use std::sync::Arc;
use crate::artifact::artifact_path;
use crate::error::{Error, Result};
use crate::source::{discover_sources, SourceFile};
use crate::stage::resolve;
use crate::target::BackendRegistry;
use crate::{forge_debug, forge_error, forge_info, forge_warn};
use super::{BatchConfig, BatchResult, Executor, Invocation, InvocationResult};

const LOG_SOURCE: &str = "forge::BatchDriver";

/// Plans and executes batch runs
pub struct BatchDriver {
    registry: BackendRegistry,
    executor: Arc<dyn Executor>,
}

impl BatchDriver {
    pub fn new(registry: BackendRegistry, executor: Arc<dyn Executor>) -> Self {
        Self { registry, executor }
    }

    /// Reject configurations that cannot produce a single valid invocation
    ///
    /// # Errors
    ///
    /// `MissingShaderModel` when the target needs a shader model and none is set.
    pub fn validate(&self, config: &BatchConfig) -> Result<()> {
        if config.target_format.requires_shader_model() && config.shader_model.is_none() {
            forge_error!(LOG_SOURCE, "Target '{}' requires a shader model", config.target_format);
            return Err(Error::MissingShaderModel(config.target_format));
        }
        Ok(())
    }

    /// Build the invocations for `sources`, without any I/O
    ///
    /// Sources keep their order; within a source, stages follow the resolver order.
    /// The stage set and backend are resolved once for the whole plan.
    pub fn plan(&self, config: &BatchConfig, sources: &[SourceFile]) -> Result<Vec<Invocation>> {
        self.validate(config)?;

        let stages = resolve(config.shader_kind);
        let backend = self.registry.lookup(config.target_format);

        let mut invocations = Vec::with_capacity(sources.len() * stages.len());
        for source_file in sources {
            for stage in stages {
                let output_path = artifact_path(&config.output_dir, source_file, stage, backend);
                let args = self.registry.build_args(
                    backend,
                    source_file,
                    stage,
                    &output_path,
                    config.shader_model.as_ref(),
                )?;
                invocations.push(Invocation {
                    source_file: source_file.clone(),
                    stage: *stage,
                    program: backend.executable_path.clone(),
                    args,
                    output_path,
                });
            }
        }
        Ok(invocations)
    }

    /// Validate, discover and plan, without creating or spawning anything
    pub fn prepare(&self, config: &BatchConfig) -> Result<Vec<Invocation>> {
        self.validate(config)?;
        let sources = discover_sources(&config.source_root, &config.source_extension)?;
        if sources.is_empty() {
            forge_warn!(LOG_SOURCE, "No .{} sources found under {}",
                config.source_extension, config.source_root.display());
        }
        self.plan(config, &sources)
    }

    /// Run a whole batch
    ///
    /// # Errors
    ///
    /// Configuration errors (`MissingShaderModel`, `SourceNotFound`,
    /// `DirectoryCreationFailed`) abort before any backend is spawned.
    /// Backend failures are not errors here; they are recorded in the BatchResult.
    pub fn run(&self, config: &BatchConfig) -> Result<BatchResult> {
        let plan = self.prepare(config)?;

        fs::create_dir_all(&config.output_dir).map_err(|e| {
            forge_error!(LOG_SOURCE, "Failed to create output directory {}: {}",
                config.output_dir.display(), e);
            Error::DirectoryCreationFailed {
                path: config.output_dir.clone(),
                reason: e.to_string(),
            }
        })?;

        forge_info!(LOG_SOURCE, "Compiling {} invocation(s) for target '{}' into {}",
            plan.len(), config.target_format, config.output_dir.display());

        let result = self.execute(&plan);

        if result.all_succeeded() {
            forge_info!(LOG_SOURCE, "{} invocation(s) succeeded", result.len());
        } else {
            forge_warn!(LOG_SOURCE, "{} of {} invocation(s) failed",
                result.failed_count(), result.len());
        }
        Ok(result)
    }

    /// Run every planned invocation in order, isolating failures
    pub fn execute(&self, plan: &[Invocation]) -> BatchResult {
        let mut result = BatchResult::new();
        for invocation in plan {
            result.push(self.execute_one(invocation));
        }
        result
    }

    fn execute_one(&self, invocation: &Invocation) -> InvocationResult {
        forge_info!(LOG_SOURCE, "Compiling {} [{}] -> {}",
            invocation.source_file.path.display(), invocation.stage.tag, invocation.output_path.display());
        forge_debug!(LOG_SOURCE, "{}", invocation.command_line());

        match self.executor.execute(invocation) {
            Ok(0) => InvocationResult::from_exit_code(invocation, 0),
            Ok(code) => {
                forge_error!(LOG_SOURCE, "Backend failed for {} [{}] with exit code {}",
                    invocation.source_file.path.display(), invocation.stage.tag, code);
                InvocationResult::from_exit_code(invocation, code)
            }
            Err(e) => {
                forge_error!(LOG_SOURCE, "Backend not run for {} [{}]: {}",
                    invocation.source_file.path.display(), invocation.stage.tag, e);
                InvocationResult::spawn_failed(invocation)
            }
        }
    }
}

#[cfg(test)]
#[path = "batch_driver_tests.rs"]
mod tests;
