// src/main.rs
use anyhow::Result;
use clap::Parser;

use poetry_version::app;
use poetry_version::cli::Args;
use poetry_version::config::Config;

fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::from_args(args)?;
    app::run(&config)
}
