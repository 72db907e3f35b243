//! Taxonomy data model and the in-memory dataset
//!
//! A dataset is an ordered list of records, each carrying a full six-level
//! classification path and its terminal species.

mod dataset;
mod level;
mod model;

#[cfg(test)]
pub(crate) mod fixtures;

pub use dataset::Dataset;
pub use level::{Level, ParseLevelError};
pub use model::{
    LocalNames, LocalizedText, Media, MediaItem, Reference, RegionalName, Species,
    TaxonNode, TaxonPath, TaxonomyRecord,
};
