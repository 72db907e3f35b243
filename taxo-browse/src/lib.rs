//! taxo-browse library - terminal taxonomy browser
//!
//! Loads the dataset once and exposes search, cascading drill-down and
//! species cards as subcommands.

use std::sync::Arc;
use std::time::Duration;

use taxo_common::Dataset;

pub mod cli;
pub mod commands;
pub mod logging;
pub mod output;

pub use output::OutputFormat;

/// State shared by every command
#[derive(Debug, Clone)]
pub struct AppState {
    /// Immutable for the session
    pub dataset: Arc<Dataset>,
    pub debounce: Duration,
    pub format: OutputFormat,
}

impl AppState {
    pub fn new(dataset: Dataset, debounce: Duration, format: OutputFormat) -> Self {
        Self {
            dataset: Arc::new(dataset),
            debounce,
            format,
        }
    }
}
