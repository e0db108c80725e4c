// src/error.rs
use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Cannot find a `{file}` file in the current folder: {dir}")]
    ManifestMissing { file: &'static str, dir: PathBuf },

    #[error("Failed to run `{program}`: {source}")]
    CommandSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{program}` exited with {status}")]
    CommandFailed { program: String, status: ExitStatus },

    #[error("`{program}` produced output that is not valid UTF-8")]
    OutputDecode {
        program: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("Expected `<name> <version>` from `{program}`, got {output:?}")]
    OutputShape { program: String, output: String },
}

pub type Result<T> = std::result::Result<T, AppError>;
