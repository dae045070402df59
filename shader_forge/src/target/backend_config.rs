/// Backend executable locations

use std::env::consts::EXE_SUFFIX;
use std::path::{Path, PathBuf};
use crate::error::Result;

/// Where the backend executables live
///
/// Defaults are laid out next to the tool installation, not the caller's
/// working directory:
///
/// ```text
/// <tool_dir>/../ShaderConductor/Bin/Release/ShaderConductorCmd[.exe]
/// <tool_dir>/../DirectXShaderCompiler/dxc[.exe]
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    /// Cross compiler used for GLSL and SPIR-V
    pub cross_compiler: PathBuf,
    /// Platform compiler used for DXIL
    pub platform_compiler: PathBuf,
}

impl BackendConfig {
    /// Default layout rooted at `tool_dir`
    pub fn relative_to(tool_dir: &Path) -> Self {
        let root = tool_dir.join("..");
        Self {
            cross_compiler: root
                .join("ShaderConductor")
                .join("Bin")
                .join("Release")
                .join(format!("ShaderConductorCmd{}", EXE_SUFFIX)),
            platform_compiler: root
                .join("DirectXShaderCompiler")
                .join(format!("dxc{}", EXE_SUFFIX)),
        }
    }

    /// Default layout rooted at the directory of the running executable
    ///
    /// # Errors
    ///
    /// Returns an error if the executable path cannot be determined.
    pub fn from_current_exe() -> Result<Self> {
        let exe = std::env::current_exe().map_err(|e| {
            crate::forge_err!("forge::BackendConfig", UsageError,
                "Cannot locate the running executable: {}", e)
        })?;
        let Some(tool_dir) = exe.parent() else {
            crate::forge_bail!("forge::BackendConfig", UsageError,
                "Executable {} has no parent directory", exe.display());
        };
        Ok(Self::relative_to(tool_dir))
    }

    /// Override the cross compiler path
    pub fn with_cross_compiler(mut self, path: impl Into<PathBuf>) -> Self {
        self.cross_compiler = path.into();
        self
    }

    /// Override the platform compiler path
    pub fn with_platform_compiler(mut self, path: impl Into<PathBuf>) -> Self {
        self.platform_compiler = path.into();
        self
    }
}
