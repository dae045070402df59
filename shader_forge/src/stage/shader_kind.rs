/// Declared shader kind of a source file

use std::fmt;
use std::str::FromStr;
use crate::error::Error;

/// Which stages a source file provides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ShaderKind {
    /// Vertex + pixel entry points (`vs_main` / `ps_main`)
    #[default]
    VertexPixelPair,
    /// Compute entry point (`cs_main`)
    Compute,
}

impl ShaderKind {
    /// All kinds, in declaration order
    pub const ALL: [ShaderKind; 2] = [ShaderKind::VertexPixelPair, ShaderKind::Compute];

    /// Command-line token
    pub fn as_str(&self) -> &'static str {
        match self {
            ShaderKind::VertexPixelPair => "vps",
            ShaderKind::Compute => "cs",
        }
    }
}

impl fmt::Display for ShaderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShaderKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vps" => Ok(ShaderKind::VertexPixelPair),
            "cs" => Ok(ShaderKind::Compute),
            other => Err(Error::UnrecognizedShaderKind(other.to_string())),
        }
    }
}
