// src/manifest.rs
use std::path::{Path, PathBuf};

use crate::error::{AppError, Result};

/// Descriptor file Poetry reads the project metadata from.
pub const PYPROJECT_FILE: &str = "pyproject.toml";

/// Verify that `pyproject.toml` exists directly under `dir`.
///
/// Returns the descriptor path on success. The file is only checked for
/// existence, never parsed; the version is reported by Poetry itself. The
/// error carries the resolved absolute directory so the message stays
/// useful when the tool is invoked through wrappers that change the
/// working directory.
pub fn ensure_pyproject(dir: &Path) -> Result<PathBuf> {
    let candidate = dir.join(PYPROJECT_FILE);
    if candidate.exists() {
        Ok(candidate)
    } else {
        Err(AppError::ManifestMissing { file: PYPROJECT_FILE, dir: resolved(dir) })
    }
}

fn resolved(dir: &Path) -> PathBuf {
    dir.canonicalize().unwrap_or_else(|_| logical_absolute(dir))
}

fn logical_absolute(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .unwrap_or_else(|_| path.to_path_buf())
}
