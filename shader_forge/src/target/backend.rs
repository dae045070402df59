/// Backend executables and their argument conventions

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use crate::error::{Error, Result};
use crate::stage::Stage;
use super::{ShaderModel, TargetFormat};

/// Argument-template family of a backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgumentConvention {
    /// ShaderConductor-style cross compiler:
    /// `--input <src> --output <out> --entry <entry> --stage <tag> --target <name>`
    CrossCompiler {
        target_name: &'static str,
    },
    /// DXC-style platform compiler:
    /// `-E <entry> -T <tag>_<model> -Fo <out> <src>`
    PlatformCompiler,
}

/// External compiler producing one target format
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Backend {
    /// Target format produced by this backend
    pub format: TargetFormat,
    /// Executable to spawn
    pub executable_path: PathBuf,
    /// Extension of produced artifacts (without the dot)
    pub output_extension: &'static str,
    /// How arguments are laid out
    pub convention: ArgumentConvention,
}

impl Backend {
    /// Build the argument list for one stage of one source file
    ///
    /// Pure: the same inputs always give the same list.
    ///
    /// # Errors
    ///
    /// `MissingShaderModel` if the convention needs a shader model and none is given.
    pub fn arguments(
        &self,
        source_path: &Path,
        stage: &Stage,
        output_path: &Path,
        shader_model: Option<&ShaderModel>,
    ) -> Result<Vec<OsString>> {
        let args = match &self.convention {
            ArgumentConvention::CrossCompiler { target_name } => vec![
                OsString::from("--input"),
                source_path.as_os_str().to_owned(),
                OsString::from("--output"),
                output_path.as_os_str().to_owned(),
                OsString::from("--entry"),
                OsString::from(stage.entry_point),
                OsString::from("--stage"),
                OsString::from(stage.tag.as_str()),
                OsString::from("--target"),
                OsString::from(*target_name),
            ],
            ArgumentConvention::PlatformCompiler => {
                let model = shader_model.ok_or(Error::MissingShaderModel(self.format))?;
                vec![
                    OsString::from("-E"),
                    OsString::from(stage.entry_point),
                    OsString::from("-T"),
                    OsString::from(model.profile(stage.tag.as_str())),
                    OsString::from("-Fo"),
                    output_path.as_os_str().to_owned(),
                    source_path.as_os_str().to_owned(),
                ]
            }
        };
        Ok(args)
    }
}
