use std::{
    fs::File,
    path::{Path, PathBuf},
    sync::Mutex,
};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::{app::App, config::Config, error::AppError};

mod app;
mod config;
mod editor;
mod error;
mod pad;
mod utils;

/// Environment variable holding the log filter
const LOG_ENV: &str = "TYPEPAD_LOG";

/// A terminal scratchpad showing live word count, line count and WPM
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Directory containing `settings.toml`
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write logs to this file. The terminal is taken by the UI, so logs are off otherwise.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print the effective settings as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn init_logging(path: &Path) -> Result<(), AppError> {
    let file = File::create(path).map_err(|error| AppError::LogFile {
        path: path.to_path_buf(),
        error,
    })?;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()?;

    Ok(())
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    let mut config = Config::get(args.config)?;

    if args.print_config {
        print!("{}", toml::to_string_pretty(&config.settings)?);
        return Ok(());
    }

    // Query the terminal before the UI takes over
    config.settings.theme.detect_terminal_colors();

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        config_dir = ?config.directory,
        "starting"
    );

    App::new(config).run()?;

    Ok(())
}
