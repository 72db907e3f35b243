//! Command-line interface definition

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use taxo_common::Level;

#[derive(Debug, Parser)]
#[command(name = "taxo-browse", version, about = "Browse and search a bilingual species taxonomy")]
pub struct Cli {
    /// Dataset file (overrides TAXO_DATASET and the config file)
    #[arg(long, global = true)]
    pub dataset: Option<PathBuf>,

    /// Configuration file (defaults to the platform config directory)
    #[arg(long, global = true, env = "TAXO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Emit JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable coloured match highlighting
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Rank species matching a free-text query
    Search {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },

    /// Drill down through the classification levels
    Browse(BrowseArgs),

    /// Search, then open the chosen hit's classification and species card
    Jump {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        /// Which search hit to open (1-based)
        #[arg(long, default_value_t = 1)]
        pick: usize,
    },

    /// Read queries from stdin line by line, debounced
    Watch,

    /// Summarise the loaded dataset
    Info,
}

/// Selections by English name, applied top-down
#[derive(Debug, Clone, Default, Args)]
pub struct BrowseArgs {
    #[arg(long)]
    pub kingdom: Option<String>,
    #[arg(long)]
    pub phylum: Option<String>,
    #[arg(long)]
    pub class: Option<String>,
    #[arg(long)]
    pub order: Option<String>,
    #[arg(long)]
    pub family: Option<String>,
    #[arg(long)]
    pub genus: Option<String>,

    /// Clear this level after applying the selections, resetting the ones below
    #[arg(long, value_name = "LEVEL")]
    pub clear: Option<Level>,
}

impl BrowseArgs {
    pub fn get(&self, level: Level) -> Option<&str> {
        match level {
            Level::Kingdom => self.kingdom.as_deref(),
            Level::Phylum => self.phylum.as_deref(),
            Level::Class => self.class.as_deref(),
            Level::Order => self.order.as_deref(),
            Level::Family => self.family.as_deref(),
            Level::Genus => self.genus.as_deref(),
        }
    }
}

/// Join multi-token query arguments back into one string
pub fn join_query(parts: &[String]) -> String {
    parts.join(" ")
}
