/// Requested output representation

use std::fmt;
use std::str::FromStr;
use crate::error::Error;

/// Output target format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetFormat {
    /// GLSL source (`glsl`)
    SourceGlsl,
    /// SPIR-V bytecode (`spirv`)
    PortableBytecode,
    /// DXIL bytecode (`dxil`), requires a shader model
    PlatformBytecode,
}

impl TargetFormat {
    /// All formats, in declaration order
    pub const ALL: [TargetFormat; 3] = [
        TargetFormat::SourceGlsl,
        TargetFormat::PortableBytecode,
        TargetFormat::PlatformBytecode,
    ];

    /// Command-line token
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetFormat::SourceGlsl => "glsl",
            TargetFormat::PortableBytecode => "spirv",
            TargetFormat::PlatformBytecode => "dxil",
        }
    }

    /// Whether the backend for this format needs a shader model
    pub fn requires_shader_model(&self) -> bool {
        matches!(self, TargetFormat::PlatformBytecode)
    }
}

impl fmt::Display for TargetFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TargetFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "glsl" => Ok(TargetFormat::SourceGlsl),
            "spirv" => Ok(TargetFormat::PortableBytecode),
            "dxil" => Ok(TargetFormat::PlatformBytecode),
            other => Err(Error::UnrecognizedTarget(other.to_string())),
        }
    }
}
