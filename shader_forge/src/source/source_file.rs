/// A discovered shader source file

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Source file and the base name its artifacts are derived from
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceFile {
    /// Path handed to the backend
    pub path: PathBuf,
    /// File name without directory and extension, kept as an OS string so
    /// non-UTF-8 names reach the artifact unchanged
    pub base_name: OsString,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let base_name = Self::base_name_of(&path);
        Self { path, base_name }
    }

    fn base_name_of(path: &Path) -> OsString {
        path.file_stem()
            .map(OsStr::to_os_string)
            .unwrap_or_default()
    }
}
