// resub/src/main.rs
//! resub entry point.
//!
//! Loads a substitution config, compiles the engine once, and applies it to
//! each input file in turn (or to stdin when no files are given). The
//! engine itself never touches the filesystem; all file handling lives
//! here.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use resub_core::{ConfigSource, SubstitutionEngine};

#[derive(Parser)]
#[command(name = "resub", author, version, about)]
struct Cli {
    /// Substitution config file (.yml, .yaml or .json)
    #[arg(long, short = 'c')]
    config: PathBuf,

    /// Rewrite files in place instead of printing to stdout
    #[arg(long, short = 'i', default_value_t = false)]
    in_place: bool,

    /// Suppress internal logging
    #[arg(long, short = 'q', default_value_t = false)]
    quiet: bool,

    /// Input files; reads stdin when none are given
    files: Vec<PathBuf>,
}

fn main() -> Result<()> {
    let args = Cli::parse();

    if args.quiet {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Off)
            .init();
    } else {
        env_logger::Builder::from_default_env().init();
    }

    let config = ConfigSource::File(args.config.clone())
        .resolve()
        .with_context(|| format!("Failed to load config '{}'", args.config.display()))?;
    let engine =
        SubstitutionEngine::new(&config).context("Failed to compile substitution rules")?;

    if args.files.is_empty() {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        io::stdout().write_all(engine.substitute(&text).as_bytes())?;
        return Ok(());
    }

    for path in &args.files {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path.display()))?;
        let output = engine.substitute(&text);
        if args.in_place {
            fs::write(path, output)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            log::info!("Rewrote {}", path.display());
        } else {
            io::stdout().write_all(output.as_bytes())?;
        }
    }

    Ok(())
}
