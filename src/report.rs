// src/report.rs
use crate::error::{AppError, Result};
use crate::runner::CommandRunner;

/// Program consulted for the declared project version.
pub const POETRY_PROGRAM: &str = "poetry";

/// Name and version tokens reported by `poetry version`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionReport {
    pub name: String,
    pub version: String,
}

/// Ask Poetry for the declared project name and version.
///
/// The output contract is exactly `<name> <version>`; the version token is
/// forwarded verbatim, never validated or interpreted.
pub fn query_version(runner: &dyn CommandRunner) -> Result<VersionReport> {
    let stdout = runner.capture(POETRY_PROGRAM, &["version"])?;
    parse_report(POETRY_PROGRAM, &stdout)
}

fn parse_report(program: &str, stdout: &str) -> Result<VersionReport> {
    let mut tokens = stdout.split_whitespace();
    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(name), Some(version), None) => {
            Ok(VersionReport { name: name.to_string(), version: version.to_string() })
        }
        _ => Err(AppError::OutputShape {
            program: program.to_string(),
            output: stdout.trim().to_string(),
        }),
    }
}
