// src/runner.rs
use std::process::{Command, Stdio};

use crate::error::{AppError, Result};

/// Port for running an external command and capturing its stdout.
///
/// This is the tool's only collaborator; tests substitute deterministic
/// stubs so no real subprocess is spawned.
pub trait CommandRunner {
    /// Run `program` with `args`, await it fully, and return its decoded
    /// stdout. Spawn failures, non-zero exits, and undecodable output are
    /// all errors.
    fn capture(&self, program: &str, args: &[&str]) -> Result<String>;
}

/// Runs commands through [`std::process::Command`].
///
/// stdout is captured; stderr stays inherited so the underlying tool's own
/// complaints reach the user unmodified.
#[derive(Debug, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn capture(&self, program: &str, args: &[&str]) -> Result<String> {
        let output = Command::new(program)
            .args(args)
            .stderr(Stdio::inherit())
            .output()
            .map_err(|source| AppError::CommandSpawn { program: program.to_string(), source })?;

        if !output.status.success() {
            return Err(AppError::CommandFailed {
                program: program.to_string(),
                status: output.status,
            });
        }

        String::from_utf8(output.stdout)
            .map_err(|source| AppError::OutputDecode { program: program.to_string(), source })
    }
}
