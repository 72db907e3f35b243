//! # Taxo Common Library
//!
//! Shared code for the taxonomy browser including:
//! - Taxonomy data model and dataset loading
//! - Species search ranking and highlighting
//! - Cascading classification-level selection
//! - Latest-wins query debouncing
//! - Display formatting for species cards
//! - Configuration loading

pub mod cascade;
pub mod config;
pub mod display;
pub mod error;
pub mod search;
pub mod taxonomy;

pub use cascade::{CascadeError, CascadeState};
pub use error::{Error, Result};
pub use search::{highlight, search, QueryDebouncer, RankedMatch};
pub use taxonomy::{Dataset, Level, TaxonNode, TaxonPath, TaxonomyRecord};
