//! Scratch directory shared by the unit and integration tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

/// Per-process temporary directory, removed on drop even when a test panics
pub struct ScratchDir {
    path: PathBuf,
}

impl ScratchDir {
    /// `name` must be unique within one test binary
    pub fn new(name: &str) -> Self {
        let path = std::env::temp_dir()
            .join(format!("shader_forge_cli_{}_{}", std::process::id(), name));
        let _ = fs::remove_dir_all(&path);
        fs::create_dir_all(&path).unwrap();
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn join(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.path.join(relative)
    }

    /// Write a placeholder shader at `relative`, creating parent directories
    pub fn shader(&self, relative: impl AsRef<Path>) -> PathBuf {
        let path = self.path.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, "float4 vs_main() : SV_Position { return 0; }\n").unwrap();
        path
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}
