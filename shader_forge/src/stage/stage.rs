/// Stage descriptors and the StageSet resolver

use std::fmt;
use super::ShaderKind;

/// Stage flag understood by every backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StageTag {
    /// Vertex shader
    Vs,
    /// Pixel/Fragment shader
    Ps,
    /// Compute shader
    Cs,
}

impl StageTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            StageTag::Vs => "vs",
            StageTag::Ps => "ps",
            StageTag::Cs => "cs",
        }
    }
}

impl fmt::Display for StageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One compiled stage of a source file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Stage {
    /// Stage flag
    pub tag: StageTag,
    /// Entry point symbol in the HLSL source
    pub entry_point: &'static str,
    /// Infix appended to the base name of the artifact
    pub suffix: &'static str,
}

impl Stage {
    pub const VERTEX: Stage = Stage { tag: StageTag::Vs, entry_point: "vs_main", suffix: "_vert" };
    pub const PIXEL: Stage = Stage { tag: StageTag::Ps, entry_point: "ps_main", suffix: "_frag" };
    pub const COMPUTE: Stage = Stage { tag: StageTag::Cs, entry_point: "cs_main", suffix: "_comp" };
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.tag, self.entry_point)
    }
}

const VERTEX_PIXEL_STAGES: [Stage; 2] = [Stage::VERTEX, Stage::PIXEL];
const COMPUTE_STAGES: [Stage; 1] = [Stage::COMPUTE];

/// Ordered stages compiled for a shader kind
///
/// Vertex always comes before pixel; paired artifacts are produced in that order.
pub fn resolve(kind: ShaderKind) -> &'static [Stage] {
    match kind {
        ShaderKind::VertexPixelPair => &VERTEX_PIXEL_STAGES,
        ShaderKind::Compute => &COMPUTE_STAGES,
    }
}

#[cfg(test)]
#[path = "stage_tests.rs"]
mod tests;
