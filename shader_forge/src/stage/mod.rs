//! Shader stage module
//!
//! Maps a declared shader kind to the ordered stages compiled for each
//! source file.

mod shader_kind;
mod stage;

pub use shader_kind::ShaderKind;
pub use stage::{Stage, StageTag, resolve};
