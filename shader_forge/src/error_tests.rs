//! Unit tests for error.rs
//!
//! Tests the Error variants and their implementations (Display, Debug, Clone, std::error::Error).

use std::path::PathBuf;
use crate::error::{Error, Result};
use crate::target::TargetFormat;

// ============================================================================
// ERROR DISPLAY TESTS
// ============================================================================

#[test]
fn test_usage_error_display() {
    let err = Error::UsageError("expected 3 arguments, got 2".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Usage error"));
    assert!(display.contains("expected 3 arguments, got 2"));
}

#[test]
fn test_unrecognized_target_display() {
    let err = Error::UnrecognizedTarget("metal".to_string());
    let display = format!("{}", err);
    assert!(display.contains("'metal'"));
    assert!(display.contains("glsl, spirv, dxil"));
}

#[test]
fn test_unrecognized_shader_kind_display() {
    let err = Error::UnrecognizedShaderKind("gs".to_string());
    assert!(format!("{}", err).contains("'gs'"));
}

#[test]
fn test_missing_shader_model_display() {
    let err = Error::MissingShaderModel(TargetFormat::PlatformBytecode);
    assert_eq!(format!("{}", err), "Target 'dxil' requires a shader model");
}

#[test]
fn test_directory_creation_failed_display() {
    let err = Error::DirectoryCreationFailed {
        path: PathBuf::from("out/shaders"),
        reason: "permission denied".to_string(),
    };
    let display = format!("{}", err);
    assert!(display.contains("out/shaders"));
    assert!(display.contains("permission denied"));
}

#[test]
fn test_batch_failed_display() {
    let err = Error::BatchFailed { failed: 1, total: 4 };
    assert_eq!(format!("{}", err), "1 of 4 backend invocations failed");
}

// ============================================================================
// ERROR TRAIT IMPLEMENTATIONS
// ============================================================================

#[test]
fn test_error_is_std_error() {
    let err = Error::DiscoveryFailed("loop detected".to_string());
    let _: &dyn std::error::Error = &err;
}

#[test]
fn test_error_debug() {
    let err = Error::SourceNotFound(PathBuf::from("missing.hlsl"));
    let debug = format!("{:?}", err);
    assert!(debug.contains("SourceNotFound"));
    assert!(debug.contains("missing.hlsl"));
}

#[test]
fn test_error_clone() {
    let err1 = Error::BackendSpawnFailed {
        program: PathBuf::from("dxc"),
        reason: "not found".to_string(),
    };
    let err2 = err1.clone();
    assert_eq!(format!("{}", err1), format!("{}", err2));
}

// ============================================================================
// ERROR PROPAGATION TESTS
// ============================================================================

#[test]
fn test_error_propagation_with_question_mark() {
    fn inner() -> Result<u32> {
        Err(Error::InvalidShaderModel("six".to_string()))
    }

    fn outer() -> Result<u32> {
        inner()?;
        Ok(42)
    }

    assert!(matches!(outer(), Err(Error::InvalidShaderModel(_))));
}
