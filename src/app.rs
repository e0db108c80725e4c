// src/app.rs
use anyhow::{Context, Result};

use crate::config::Config;
use crate::manifest;
use crate::report;
use crate::runner::SystemRunner;

/// Run the version printer against `config.project_dir`.
///
/// The descriptor check comes first; no subprocess is spawned when the
/// project folder has no `pyproject.toml`.
pub fn run(config: &Config) -> Result<()> {
    manifest::ensure_pyproject(&config.project_dir)?;

    let report = report::query_version(&SystemRunner)
        .context("failed to query the project version from Poetry")?;

    println!("{}", report.version);
    Ok(())
}
