// src/main.rs
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use rawedit::config::Config;
use rawedit::utils::logger;
use rawedit::Editor;

/// Edit a file in the terminal. Changes are not saved.
///
/// Every single argument is a file name, `--help` and `-x` included.
#[derive(Parser, Debug)]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Args {
    /// File to open; a missing or unreadable file opens as an empty buffer.
    #[arg(allow_hyphen_values = true)]
    file: PathBuf,
}

fn main() -> Result<ExitCode> {
    let Ok(args) = Args::try_parse() else {
        let program = std::env::args_os()
            .next()
            .map(|arg| arg.to_string_lossy().into_owned())
            .unwrap_or_else(|| "rawedit".to_string());
        eprintln!("Usage: {program} <filename>");
        return Ok(ExitCode::from(1));
    };

    let config = load_config().with_env();
    logger::init(&config);

    let mut editor = Editor::open(&args.file);
    editor
        .run_terminal()
        .context("Could not run editor on this terminal")?;

    Ok(ExitCode::SUCCESS)
}

fn load_config() -> Config {
    let Some(path) = Config::default_path() else {
        return Config::default();
    };
    Config::load(&path).unwrap_or_else(|e| {
        eprintln!("warning: {e}; using default settings");
        Config::default()
    })
}
