// tests/common/mod.rs
//! Shared helpers for the end-to-end tests.

use std::fs;
use std::path::Path;

/// Create a test file with the given contents.
///
/// # Panics
///
/// Panics with a descriptive message if file creation fails.
pub fn create_test_file(path: &Path, contents: &[u8]) {
    fs::write(path, contents)
        .unwrap_or_else(|e| panic!("Failed to create test file at {:?}: {}", path, e));
}

/// Write a stub `poetry` executable into `dir` that runs `script` under `sh`.
#[cfg(unix)]
pub fn write_stub_poetry(dir: &Path, script: &str) {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("poetry");
    create_test_file(&path, format!("#!/bin/sh\n{script}\n").as_bytes());
    let mut perms = fs::metadata(&path)
        .unwrap_or_else(|e| panic!("Failed to stat stub at {:?}: {}", path, e))
        .permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms)
        .unwrap_or_else(|e| panic!("Failed to mark stub executable at {:?}: {}", path, e));
}

/// `PATH` value with `stub_dir` prepended so the stub wins resolution.
#[cfg(unix)]
pub fn path_with_stub(stub_dir: &Path) -> std::ffi::OsString {
    let mut paths = vec![stub_dir.to_path_buf()];
    if let Some(existing) = std::env::var_os("PATH") {
        paths.extend(std::env::split_paths(&existing));
    }
    std::env::join_paths(paths).expect("PATH entries should join")
}
