//! Shader source module
//!
//! Discovers the HLSL files a batch run compiles.

mod source_file;
mod discovery;

pub use source_file::SourceFile;
pub use discovery::{discover_sources, DEFAULT_SOURCE_EXTENSION};
