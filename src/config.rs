// src/config.rs
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::cli::Args;

/// Runtime configuration resolved from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory expected to contain the project descriptor.
    pub project_dir: PathBuf,
}

impl Config {
    pub fn from_args(_args: Args) -> Result<Self> {
        let project_dir =
            std::env::current_dir().context("failed to resolve the current working directory")?;
        Ok(Self { project_dir })
    }
}
