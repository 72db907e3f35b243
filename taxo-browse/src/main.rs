//! taxo-browse - terminal browser for a bilingual species taxonomy
//!
//! Loads the dataset once at startup, then runs one subcommand against it.

use anyhow::Result;
use clap::Parser;
use std::io::{IsTerminal, Write};
use tracing::{error, info, warn};

use taxo_browse::cli::Cli;
use taxo_browse::logging::init_tracing;
use taxo_browse::{commands, AppState, OutputFormat};
use taxo_common::config::{load_config, resolve_dataset_path};
use taxo_common::Dataset;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Config is read first so its [logging] section can shape the subscriber
    let loaded = load_config(cli.config.as_deref())?;
    init_tracing(&loaded.config.logging)?;

    info!(
        "Starting taxo-browse v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    match &loaded.path {
        Some(path) => info!("Configuration: {}", path.display()),
        None => warn!("No configuration file found, using defaults"),
    }

    let dataset_path = resolve_dataset_path(cli.dataset.as_deref(), &loaded.config);
    info!("Dataset path: {}", dataset_path.display());

    let dataset = match Dataset::load(&dataset_path).await {
        Ok(dataset) => dataset,
        Err(e) => {
            error!("Failed to load dataset: {}", e);
            return Err(e.into());
        }
    };

    let stdout = std::io::stdout();
    let color = !cli.no_color && stdout.is_terminal();
    let format = OutputFormat::from_flags(cli.json, color);
    let state = AppState::new(dataset, loaded.config.search.debounce(), format);

    let mut out = stdout.lock();
    commands::dispatch(&state, cli.command, &mut out).await?;
    out.flush()?;

    Ok(())
}
