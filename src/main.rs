use std::fs::OpenOptions;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use arogya_sarthi::error::{AppError, AppResult};
use arogya_sarthi::models::{config::SUPPORTED_LANGUAGES, Config};
use arogya_sarthi::ui::run_app_async;

#[derive(Parser)]
#[command(name = "arogya-sarthi")]
#[command(about = "Terminal personal health record for migrant workers")]
struct Cli {
    /// Interface language (en, hi, bn, ta, or, ml)
    #[arg(short, long)]
    language: Option<String>,

    /// Where to write the log; stdout belongs to the TUI
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Redraw interval in milliseconds
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Screen to open after registration, e.g. dashboard or voice
    #[arg(short, long)]
    view: Option<String>,

    /// Skip onboarding with a sample user
    #[arg(long)]
    demo: bool,

    /// Read settings from this file instead of the environment
    #[arg(long)]
    env_file: Option<PathBuf>,
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.env_file {
        Some(path) => Config::from_env_file(path)?,
        None => Config::from_env()?,
    };

    if let Some(language) = &cli.language {
        anyhow::ensure!(
            SUPPORTED_LANGUAGES.contains(&language.as_str()),
            "unsupported language '{}'",
            language
        );
        config.language = language.clone();
    }
    if let Some(path) = &cli.log_file {
        config.log_file = path.clone();
    }
    if let Some(ms) = cli.tick_ms {
        anyhow::ensure!(ms > 0, "--tick-ms must be positive");
        config.tick_rate_ms = ms;
    }
    if let Some(view) = &cli.view {
        config.initial_view = view.clone();
    }
    config.demo_mode = cli.demo;
    Ok(config)
}

/// Send tracing output to the log file. RUST_LOG wins over the configured level.
fn init_logging(config: &Config) -> AppResult<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)
        .map_err(|e| AppError::Logging(format!("cannot open {}: {}", config.log_file.display(), e)))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_directive()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| AppError::Logging(format!("setting default subscriber failed: {}", e)))?;
    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Configuration Error: {:#}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = init_logging(&config) {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
    info!("Configuration loaded: language={}, view={}", config.language, config.initial_view);

    if let Err(e) = run_app_async(config).await {
        error!("TUI error: {:#}", e);
        eprintln!("❌ TUI Error: {:#}", e);
        std::process::exit(1);
    }
    println!("Thanks for using Arogya Sarthi!");
}
