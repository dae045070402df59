/// Tests for BackendRegistry, Backend arguments, TargetFormat and ShaderModel

use super::*;
use crate::error::Error;
use crate::source::SourceFile;
use crate::stage::Stage;
use std::path::{Path, PathBuf};

fn test_config() -> BackendConfig {
    BackendConfig {
        cross_compiler: PathBuf::from("tools/ShaderConductorCmd"),
        platform_compiler: PathBuf::from("tools/dxc"),
    }
}

fn args_as_strings(args: &[OsString]) -> Vec<String> {
    args.iter().map(|a| a.to_string_lossy().into_owned()).collect()
}

// ============================================================================
// Tests: lookup
// ============================================================================

#[test]
fn test_lookup_is_total() {
    let registry = BackendRegistry::new(&test_config());
    for format in TargetFormat::ALL {
        let backend = registry.lookup(format);
        assert_eq!(backend.format, format);
        assert!(!backend.output_extension.is_empty());
    }
}

#[test]
fn test_lookup_executables() {
    let registry = BackendRegistry::new(&test_config());
    assert_eq!(registry.lookup(TargetFormat::SourceGlsl).executable_path, PathBuf::from("tools/ShaderConductorCmd"));
    assert_eq!(registry.lookup(TargetFormat::PortableBytecode).executable_path, PathBuf::from("tools/ShaderConductorCmd"));
    assert_eq!(registry.lookup(TargetFormat::PlatformBytecode).executable_path, PathBuf::from("tools/dxc"));
}

#[test]
fn test_lookup_extensions() {
    let registry = BackendRegistry::new(&test_config());
    assert_eq!(registry.lookup(TargetFormat::SourceGlsl).output_extension, "glsl");
    assert_eq!(registry.lookup(TargetFormat::PortableBytecode).output_extension, "spirv");
    assert_eq!(registry.lookup(TargetFormat::PlatformBytecode).output_extension, "cso");
}

// ============================================================================
// Tests: build_args
// ============================================================================

#[test]
fn test_build_args_cross_compiler() {
    let registry = BackendRegistry::new(&test_config());
    let backend = registry.lookup(TargetFormat::SourceGlsl);
    let source = SourceFile::new("shaders/triangle.hlsl");

    let args = registry
        .build_args(backend, &source, &Stage::VERTEX, Path::new("out/triangle_vert.glsl"), None)
        .unwrap();

    assert_eq!(
        args_as_strings(&args),
        vec![
            "--input", "shaders/triangle.hlsl",
            "--output", "out/triangle_vert.glsl",
            "--entry", "vs_main",
            "--stage", "vs",
            "--target", "glsl",
        ]
    );
}

#[test]
fn test_build_args_spirv_target_name() {
    let registry = BackendRegistry::new(&test_config());
    let backend = registry.lookup(TargetFormat::PortableBytecode);
    let source = SourceFile::new("blur.hlsl");

    let args = registry
        .build_args(backend, &source, &Stage::COMPUTE, Path::new("out/blur_comp.spirv"), None)
        .unwrap();
    let args = args_as_strings(&args);

    assert_eq!(args[args.len() - 2..], ["--target".to_string(), "spirv".to_string()]);
    assert!(args.contains(&"cs_main".to_string()));
}

#[test]
fn test_build_args_platform_compiler() {
    let registry = BackendRegistry::new(&test_config());
    let backend = registry.lookup(TargetFormat::PlatformBytecode);
    let source = SourceFile::new("triangle.hlsl");
    let model = ShaderModel::default();

    let args = registry
        .build_args(backend, &source, &Stage::PIXEL, Path::new("out/triangle_frag.cso"), Some(&model))
        .unwrap();

    assert_eq!(
        args_as_strings(&args),
        vec!["-E", "ps_main", "-T", "ps_6_0", "-Fo", "out/triangle_frag.cso", "triangle.hlsl"]
    );
}

#[test]
fn test_build_args_platform_profiles() {
    let registry = BackendRegistry::new(&test_config());
    let backend = registry.lookup(TargetFormat::PlatformBytecode);
    let source = SourceFile::new("a.hlsl");
    let model: ShaderModel = "6_0".parse().unwrap();

    for (stage, profile) in [(Stage::VERTEX, "vs_6_0"), (Stage::PIXEL, "ps_6_0"), (Stage::COMPUTE, "cs_6_0")] {
        let args = registry
            .build_args(backend, &source, &stage, Path::new("out/a.cso"), Some(&model))
            .unwrap();
        assert_eq!(args[3], OsString::from(profile));
    }
}

#[test]
fn test_build_args_platform_missing_shader_model() {
    let registry = BackendRegistry::new(&test_config());
    let backend = registry.lookup(TargetFormat::PlatformBytecode);
    let source = SourceFile::new("triangle.hlsl");

    let result = registry.build_args(backend, &source, &Stage::VERTEX, Path::new("out/t.cso"), None);
    assert!(matches!(result, Err(Error::MissingShaderModel(TargetFormat::PlatformBytecode))));
}

#[test]
fn test_build_args_cross_compiler_ignores_shader_model() {
    let registry = BackendRegistry::new(&test_config());
    let backend = registry.lookup(TargetFormat::SourceGlsl);
    let source = SourceFile::new("triangle.hlsl");
    let model = ShaderModel::new(6, 5);

    let with_model = registry
        .build_args(backend, &source, &Stage::VERTEX, Path::new("o.glsl"), Some(&model))
        .unwrap();
    let without_model = registry
        .build_args(backend, &source, &Stage::VERTEX, Path::new("o.glsl"), None)
        .unwrap();
    assert_eq!(with_model, without_model);
}

#[test]
fn test_build_args_idempotent() {
    let registry = BackendRegistry::new(&test_config());
    let source = SourceFile::new("triangle.hlsl");
    let model = ShaderModel::default();

    for format in TargetFormat::ALL {
        let backend = registry.lookup(format);
        let first = registry.build_args(backend, &source, &Stage::VERTEX, Path::new("o"), Some(&model)).unwrap();
        let second = registry.build_args(backend, &source, &Stage::VERTEX, Path::new("o"), Some(&model)).unwrap();
        assert_eq!(first, second);
    }
}

// ============================================================================
// Tests: TargetFormat
// ============================================================================

#[test]
fn test_target_format_from_str() {
    assert_eq!("glsl".parse::<TargetFormat>().unwrap(), TargetFormat::SourceGlsl);
    assert_eq!("spirv".parse::<TargetFormat>().unwrap(), TargetFormat::PortableBytecode);
    assert_eq!("dxil".parse::<TargetFormat>().unwrap(), TargetFormat::PlatformBytecode);
}

#[test]
fn test_target_format_from_str_unknown() {
    let result = "metal".parse::<TargetFormat>();
    assert!(matches!(result, Err(Error::UnrecognizedTarget(ref s)) if s == "metal"));
}

#[test]
fn test_target_format_requires_shader_model() {
    assert!(!TargetFormat::SourceGlsl.requires_shader_model());
    assert!(!TargetFormat::PortableBytecode.requires_shader_model());
    assert!(TargetFormat::PlatformBytecode.requires_shader_model());
}

// ============================================================================
// Tests: ShaderModel
// ============================================================================

#[test]
fn test_shader_model_parse_underscore() {
    let model: ShaderModel = "6_0".parse().unwrap();
    assert_eq!(model.major(), 6);
    assert_eq!(model.minor(), 0);
    assert_eq!(model.to_string(), "6_0");
}

#[test]
fn test_shader_model_parse_dot_normalizes() {
    let model: ShaderModel = "6.6".parse().unwrap();
    assert_eq!(model.to_string(), "6_6");
    assert_eq!(model.profile("cs"), "cs_6_6");
}

#[test]
fn test_shader_model_parse_invalid() {
    for input in ["", "6", "6_", "_0", "six_0", "6_0_1", "6-0", "+6_0"] {
        let result = input.parse::<ShaderModel>();
        assert!(matches!(result, Err(Error::InvalidShaderModel(_))), "accepted {:?}", input);
    }
}

// ============================================================================
// Tests: BackendConfig
// ============================================================================

#[test]
fn test_backend_config_relative_to_tool_dir() {
    let config = BackendConfig::relative_to(Path::new("/opt/forge/bin"));
    assert!(config.cross_compiler.starts_with("/opt/forge/bin/.."));
    assert!(config.cross_compiler.to_string_lossy().contains("ShaderConductorCmd"));
    assert!(config.platform_compiler.starts_with("/opt/forge/bin/.."));
    assert!(config.platform_compiler.to_string_lossy().contains("dxc"));
}

#[test]
fn test_backend_config_overrides() {
    let config = BackendConfig::relative_to(Path::new("bin"))
        .with_cross_compiler("/usr/bin/sc")
        .with_platform_compiler("/usr/bin/dxc");
    assert_eq!(config.cross_compiler, PathBuf::from("/usr/bin/sc"));
    assert_eq!(config.platform_compiler, PathBuf::from("/usr/bin/dxc"));
}
