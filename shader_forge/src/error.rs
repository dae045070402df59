//! Error types for Shader Forge
//!
//! This module defines the error types used throughout the forge,
//! covering command-line usage, configuration validation, source discovery
//! and backend execution.

use std::fmt;
use std::path::PathBuf;
use crate::target::TargetFormat;

/// Result type for Shader Forge operations
pub type Result<T> = std::result::Result<T, Error>;

/// Shader Forge errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Wrong number of arguments or unknown option
    UsageError(String),

    /// Target format string matches none of the known formats
    UnrecognizedTarget(String),

    /// Shader kind string matches none of the known kinds
    UnrecognizedShaderKind(String),

    /// Shader model string is not of the form `<major>_<minor>`
    InvalidShaderModel(String),

    /// Target format requires a shader model and none was supplied
    MissingShaderModel(TargetFormat),

    /// Source file or directory does not exist
    SourceNotFound(PathBuf),

    /// Source directory walk failed
    DiscoveryFailed(String),

    /// Output directory could not be created
    DirectoryCreationFailed {
        path: PathBuf,
        reason: String,
    },

    /// Backend executable could not be spawned
    BackendSpawnFailed {
        program: PathBuf,
        reason: String,
    },

    /// At least one backend invocation of a batch failed
    BatchFailed {
        failed: usize,
        total: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UsageError(msg) => write!(f, "Usage error: {}", msg),
            Error::UnrecognizedTarget(target) => write!(
                f,
                "Unrecognized target '{}' (expected one of: glsl, spirv, dxil)",
                target
            ),
            Error::UnrecognizedShaderKind(kind) => write!(
                f,
                "Unrecognized shader kind '{}' (expected one of: vps, cs)",
                kind
            ),
            Error::InvalidShaderModel(model) => write!(
                f,
                "Invalid shader model '{}' (expected <major>_<minor>, e.g. 6_0)",
                model
            ),
            Error::MissingShaderModel(format) => {
                write!(f, "Target '{}' requires a shader model", format)
            }
            Error::SourceNotFound(path) => {
                write!(f, "Source not found: {}", path.display())
            }
            Error::DiscoveryFailed(msg) => write!(f, "Source discovery failed: {}", msg),
            Error::DirectoryCreationFailed { path, reason } => write!(
                f,
                "Failed to create output directory {}: {}",
                path.display(),
                reason
            ),
            Error::BackendSpawnFailed { program, reason } => write!(
                f,
                "Failed to spawn backend {}: {}",
                program.display(),
                reason
            ),
            Error::BatchFailed { failed, total } => {
                write!(f, "{} of {} backend invocations failed", failed, total)
            }
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
