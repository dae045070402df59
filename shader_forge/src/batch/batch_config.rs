/// Configuration of one batch run

use std::path::PathBuf;
use crate::source::DEFAULT_SOURCE_EXTENSION;
use crate::stage::ShaderKind;
use crate::target::{ShaderModel, TargetFormat};

/// Everything a batch run needs, fixed for the whole run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchConfig {
    /// Single source file or directory to walk
    pub source_root: PathBuf,
    /// Declared kind of every source file
    pub shader_kind: ShaderKind,
    /// Requested output format
    pub target_format: TargetFormat,
    /// Flat output directory
    pub output_dir: PathBuf,
    /// Required for the platform bytecode target
    pub shader_model: Option<ShaderModel>,
    /// Extension recognized in directory mode (without the dot)
    pub source_extension: String,
}

impl BatchConfig {
    pub fn new(
        source_root: impl Into<PathBuf>,
        shader_kind: ShaderKind,
        target_format: TargetFormat,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            source_root: source_root.into(),
            shader_kind,
            target_format,
            output_dir: output_dir.into(),
            shader_model: None,
            source_extension: DEFAULT_SOURCE_EXTENSION.to_string(),
        }
    }

    pub fn with_shader_model(mut self, shader_model: ShaderModel) -> Self {
        self.shader_model = Some(shader_model);
        self
    }

    pub fn with_source_extension(mut self, extension: impl Into<String>) -> Self {
        self.source_extension = extension.into();
        self
    }
}
