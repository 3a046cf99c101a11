//! Bookshelf CLI
//!
//! Interactive menu for Bookshelf - a personal book catalog kept in a
//! single JSON file.

use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use bookshelf_core::{Catalog, Config, JsonFileStorage};

mod menu;
mod messages;
mod table;

use menu::Menu;
use messages::{Language, Messages};

#[derive(Parser)]
#[command(name = "bookshelf")]
#[command(about = "Bookshelf - personal book catalog in a single JSON file")]
#[command(version)]
struct Cli {
    /// Catalog file to use instead of the configured one
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Interface language: "ru" or "en"
    #[arg(long, value_name = "LANG")]
    language: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load().context("Failed to load configuration")?;
    if let Some(path) = cli.file {
        config.library_path = path;
    }
    if let Some(language) = cli.language {
        config.language = language;
    }

    init_logging(&config);

    let language = match Language::from_tag(&config.language) {
        Some(language) => language,
        None => {
            eprintln!(
                "Warning: unknown language {:?}, using Russian",
                config.language
            );
            Language::default()
        }
    };
    let messages = Messages::for_language(language);

    info!("Opening catalog at {:?}", config.library_path);
    let catalog = Catalog::new(JsonFileStorage::new(config.library_path));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut menu = Menu::new(catalog, messages, stdin.lock(), stdout.lock());
    menu.run()
}

/// Initialize logging for the interactive session
///
/// Only initializes if the BOOKSHELF_LOG environment variable is set.
/// Logs go to a file (config.log_file, or the catalog path with a .log
/// extension) so log lines never interleave with the menu itself.
fn init_logging(config: &Config) {
    // Only log if BOOKSHELF_LOG is set
    let Ok(log_level) = std::env::var("BOOKSHELF_LOG") else {
        return;
    };

    let log_path = config
        .log_file
        .clone()
        .unwrap_or_else(|| config.library_path.with_extension("log"));

    let log_file = match File::create(&log_path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Warning: Could not create log file {:?}: {}", log_path, e);
            return;
        }
    };

    let env_filter = EnvFilter::new(format!(
        "bookshelf_core={},bookshelf={}",
        log_level, log_level
    ));

    // Initialize file-based logging (ignore error if already initialized)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(log_file))
        .try_init();

    info!("Logging initialized to {:?}", log_path);
}
