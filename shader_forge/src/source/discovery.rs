/// Source discovery: single file or recursive directory walk

use std::collections::HashMap;
use std::ffi::OsStr;
use std::path::Path;
use walkdir::WalkDir;
use crate::error::{Error, Result};
use crate::{forge_debug, forge_trace, forge_warn};
use super::SourceFile;

/// Extension of HLSL sources picked up in directory mode
pub const DEFAULT_SOURCE_EXTENSION: &str = "hlsl";

const LOG_SOURCE: &str = "forge::discovery";

/// Enumerate the source files under `root`
///
/// A file root is returned as-is, whatever its extension. A directory root is
/// walked recursively; files whose extension matches `extension`
/// (case-insensitive, without the dot) are kept, sorted by file name within
/// each directory.
///
/// Unreadable entries below the root are logged and skipped.
///
/// # Errors
///
/// `SourceNotFound` if `root` does not exist, `DiscoveryFailed` if the root
/// directory itself cannot be read.
pub fn discover_sources(root: &Path, extension: &str) -> Result<Vec<SourceFile>> {
    if root.is_file() {
        forge_debug!(LOG_SOURCE, "Single source file {}", root.display());
        return Ok(vec![SourceFile::new(root)]);
    }

    if !root.is_dir() {
        crate::forge_error!(LOG_SOURCE, "Source {} does not exist", root.display());
        return Err(Error::SourceNotFound(root.to_path_buf()));
    }

    let extension = extension.trim_start_matches('.');
    let mut sources = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => {
                return Err(crate::forge_err!(LOG_SOURCE, DiscoveryFailed,
                    "Cannot read {}: {}", root.display(), e));
            }
            Err(e) => {
                forge_warn!(LOG_SOURCE, "Skipping unreadable entry under {}: {}", root.display(), e);
                continue;
            }
        };

        // Symlinked files count; symlinked directories are not descended into
        if !entry.path().is_file() {
            continue;
        }

        let path = entry.path();
        let matches = path
            .extension()
            .map(|ext| ext.to_string_lossy().eq_ignore_ascii_case(extension))
            .unwrap_or(false);

        if matches {
            forge_trace!(LOG_SOURCE, "Found {}", path.display());
            sources.push(SourceFile::new(path));
        }
    }

    warn_on_base_name_collisions(&sources);

    forge_debug!(LOG_SOURCE, "Discovered {} source files under {}", sources.len(), root.display());
    Ok(sources)
}

/// Outputs are flat, so equal base names overwrite each other
fn warn_on_base_name_collisions(sources: &[SourceFile]) {
    let mut seen: HashMap<&OsStr, &Path> = HashMap::new();
    for source in sources {
        if let Some(previous) = seen.insert(&source.base_name, &source.path) {
            forge_warn!(LOG_SOURCE,
                "{} and {} share the base name '{}'; the later artifacts overwrite the earlier ones",
                previous.display(), source.path.display(), source.base_name.to_string_lossy());
        }
    }
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
