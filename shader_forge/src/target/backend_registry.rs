/// Target backend registry
///
/// One backend per target format, built once from a BackendConfig and shared
/// by every invocation of a batch run.

use std::ffi::OsString;
use std::path::Path;
use crate::error::Result;
use crate::source::SourceFile;
use crate::stage::Stage;
use super::{ArgumentConvention, Backend, BackendConfig, ShaderModel, TargetFormat};

/// Total mapping from TargetFormat to Backend
#[derive(Debug, Clone)]
pub struct BackendRegistry {
    glsl: Backend,
    spirv: Backend,
    dxil: Backend,
}

impl BackendRegistry {
    /// Build the registry from configured executable paths
    pub fn new(config: &BackendConfig) -> Self {
        Self {
            glsl: Backend {
                format: TargetFormat::SourceGlsl,
                executable_path: config.cross_compiler.clone(),
                output_extension: "glsl",
                convention: ArgumentConvention::CrossCompiler { target_name: "glsl" },
            },
            spirv: Backend {
                format: TargetFormat::PortableBytecode,
                executable_path: config.cross_compiler.clone(),
                output_extension: "spirv",
                convention: ArgumentConvention::CrossCompiler { target_name: "spirv" },
            },
            dxil: Backend {
                format: TargetFormat::PlatformBytecode,
                executable_path: config.platform_compiler.clone(),
                output_extension: "cso",
                convention: ArgumentConvention::PlatformCompiler,
            },
        }
    }

    /// Backend for a target format
    pub fn lookup(&self, format: TargetFormat) -> &Backend {
        match format {
            TargetFormat::SourceGlsl => &self.glsl,
            TargetFormat::PortableBytecode => &self.spirv,
            TargetFormat::PlatformBytecode => &self.dxil,
        }
    }

    /// Argument list for one (source file, stage) pair
    ///
    /// # Errors
    ///
    /// `MissingShaderModel` for the platform backend without a shader model.
    pub fn build_args(
        &self,
        backend: &Backend,
        source_file: &SourceFile,
        stage: &Stage,
        output_path: &Path,
        shader_model: Option<&ShaderModel>,
    ) -> Result<Vec<OsString>> {
        backend.arguments(&source_file.path, stage, output_path, shader_model)
    }
}

#[cfg(test)]
#[path = "backend_registry_tests.rs"]
mod tests;
