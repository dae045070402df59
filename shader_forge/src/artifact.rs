/// Artifact naming: `<base_name><stage suffix>.<extension>`

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use crate::source::SourceFile;
use crate::stage::Stage;
use crate::target::Backend;

/// Output file name for one stage of a source file
///
/// Stage suffixes are distinct, so the stages of one source never collide.
pub fn artifact_name(source_file: &SourceFile, stage: &Stage, backend: &Backend) -> OsString {
    let mut name = source_file.base_name.clone();
    name.push(stage.suffix);
    name.push(".");
    name.push(backend.output_extension);
    name
}

/// `artifact_name` placed in `output_dir`
pub fn artifact_path(output_dir: &Path, source_file: &SourceFile, stage: &Stage, backend: &Backend) -> PathBuf {
    output_dir.join(artifact_name(source_file, stage, backend))
}

#[cfg(test)]
#[path = "artifact_tests.rs"]
mod tests;
