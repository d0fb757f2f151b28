//! Input file discovery under the results tree

use std::fs;
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Files in `dir` whose name ends with `suffix`, sorted by path.
///
/// A missing directory yields no files.
pub fn files_with_suffix(dir: &Path, suffix: &str) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        tracing::debug!(dir = %dir.display(), "input directory missing, nothing to do");
        return Ok(Vec::new());
    }

    let entries =
        fs::read_dir(dir).map_err(|e| Error::io(format!("listing {}", dir.display()), e))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::io(format!("listing {}", dir.display()), e))?;
        let path = entry.path();
        let matches = path.file_name().and_then(|n| n.to_str()).is_some_and(|n| n.ends_with(suffix));
        if matches && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Names of the immediate subdirectories of `root`, sorted.
pub fn subdirectories(root: &Path) -> Result<Vec<String>> {
    let entries =
        fs::read_dir(root).map_err(|e| Error::io(format!("listing {}", root.display()), e))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::io(format!("listing {}", root.display()), e))?;
        if entry.path().is_dir() {
            if let Some(name) = entry.file_name().to_str() {
                names.push(name.to_string());
            }
        }
    }
    names.sort();
    Ok(names)
}

/// File name of `path` as UTF-8, or an empty string
pub fn file_name(path: &Path) -> &str {
    path.file_name().and_then(|n| n.to_str()).unwrap_or_default()
}
