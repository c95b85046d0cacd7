//! Grumpy Gordon - command-line task tracker
//!
//! CLI entry point: loads config and tasks, then runs the interaction loop.

use std::fs::{self, OpenOptions};
use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::Parser;
use eyre::{Context, Result};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use grumpygordon::cli::Cli;
use grumpygordon::config::Config;
use grumpygordon::session::{EditorSource, LineSource, ReaderSource, Session};
use grumpygordon::{Storage, Ui};

/// Log file under the user's local data dir, or the working dir without one
fn log_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("grumpygordon")
        .join("logs")
        .join("grumpygordon.log")
}

/// Send tracing output to the log file; stdout belongs to the conversation
fn init_tracing(verbose: bool) -> Result<PathBuf> {
    let path = log_path();
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).wrap_err_with(|| format!("Can't create {}", dir.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .wrap_err_with(|| format!("Can't open {}", path.display()))?;

    let fallback = if verbose { "grumpygordon=debug" } else { "grumpygordon=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_writer(file)
        .with_ansi(false)
        .with_env_filter(filter)
        .init();

    Ok(path)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_file = init_tracing(cli.verbose).context("Failed to set up logging")?;
    debug!(log_file = %log_file.display(), verbose = cli.verbose, "Tracing ready");

    let mut config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    if let Some(data_file) = cli.data_file {
        config.storage.data_file = data_file;
    }
    if cli.no_color {
        config.ui.color = false;
    }

    info!(data_file = %config.storage.data_file.display(), "Grumpy Gordon starting");

    let storage = Storage::new(&config.storage.data_file);
    let tasks = storage.load().context("Failed to load tasks")?;

    let color = config.ui.color && io::stdout().is_terminal();
    colored::control::set_override(color);

    let mut input: Box<dyn LineSource> = if io::stdin().is_terminal() {
        Box::new(EditorSource::new(config.ui.history).context("Failed to set up line editor")?)
    } else {
        Box::new(ReaderSource::new(io::stdin().lock()))
    };

    let mut session = Session::new(tasks, storage, Ui::stdout(color));
    session.run(input.as_mut())?;

    info!("Grumpy Gordon finished");
    Ok(())
}
