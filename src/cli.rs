// src/cli.rs
use clap::Parser;

/// Print the version declared by the Poetry project in the current directory.
///
/// The tool takes no flags or positionals of its own; the derived parser
/// only contributes `--help`/`--version` and rejects unexpected arguments.
#[derive(Parser, Debug)]
#[command(name = "poetry_version", version = crate::VERSION, about = "Poetry プロジェクトの宣言バージョンを表示")]
pub struct Args {}
