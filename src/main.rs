//! linedit - A line-oriented interactive text file editor.
//!
//! # Usage
//!
//! ```bash
//! linedit notes.txt
//! linedit --verbose notes.txt
//! linedit --log-file edit.log --save notes.txt
//! ```

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use linedit::app::App;
use linedit::config::{
    ConfigFlags, clear_config_flags, global_config_path, load_config_flags, local_override_path,
    save_config_flags,
};

/// A line-oriented interactive text file editor
#[derive(Parser, Debug)]
#[command(name = "linedit", version, about, long_about = None)]
struct Cli {
    /// File to edit (created on first save if it does not exist)
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Log each edit, load and save
    #[arg(short, long)]
    verbose: bool,

    /// Print error prefixes without colour
    #[arg(long)]
    no_color: bool,

    /// Write log output to a file instead of stderr
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Save current command-line flags as defaults
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,
}

fn init_logging(verbose: bool, log_file: Option<&Path>) -> Result<()> {
    let level = if verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };
    let filter = EnvFilter::from_default_env().add_directive(level.into());
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("Failed to create log file {}", path.display()))?;
        builder
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    } else {
        builder.with_writer(io::stderr).init();
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = ConfigFlags {
        verbose: cli.verbose,
        no_color: cli.no_color,
        log_file: cli.log_file.clone(),
    };

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);

    init_logging(effective.verbose, effective.log_file.as_deref())?;

    let mut app = App::open(&cli.file)
        .with_context(|| format!("Failed to load {}", cli.file.display()))?
        .with_color(!effective.no_color);

    let stdin = io::stdin().lock();
    let stdout = BufWriter::new(io::stdout().lock());
    app.run(stdin, stdout).context("Input error")
}
