//! Dataset loading and validation
//!
//! The dataset is read once at startup and is immutable for the session.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::{Level, TaxonomyRecord};
use crate::{Error, Result};

/// Top-level dataset document: `{ "taxonomy": [...] }`
#[derive(Debug, Deserialize)]
struct DatasetDocument {
    taxonomy: Vec<TaxonomyRecord>,
}

/// Ordered, read-only collection of taxonomy records
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<TaxonomyRecord>,
    source: Option<PathBuf>,
    last_modified: Option<DateTime<Utc>>,
}

impl Dataset {
    /// Build a dataset from already-parsed records
    ///
    /// # Errors
    /// Returns `Error::InvalidDataset` if any record has an unpopulated
    /// classification level.
    pub fn from_records(records: Vec<TaxonomyRecord>) -> Result<Self> {
        validate(&records)?;
        Ok(Self {
            records,
            source: None,
            last_modified: None,
        })
    }

    /// Parse a dataset document from JSON text
    pub fn from_json_str(json: &str) -> Result<Self> {
        let document: DatasetDocument = serde_json::from_str(json)?;
        Self::from_records(document.taxonomy)
    }

    /// Load and validate the dataset file at `path`
    ///
    /// Records the file's modification time for display.
    pub async fn load(path: &Path) -> Result<Self> {
        let content = tokio::fs::read_to_string(path).await?;
        let mut dataset = Self::from_json_str(&content)?;

        dataset.last_modified = tokio::fs::metadata(path)
            .await
            .and_then(|meta| meta.modified())
            .ok()
            .map(DateTime::<Utc>::from);
        dataset.source = Some(path.to_path_buf());

        info!(
            path = %path.display(),
            records = dataset.len(),
            "Loaded taxonomy dataset"
        );
        Ok(dataset)
    }

    pub fn records(&self) -> &[TaxonomyRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&TaxonomyRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// File the dataset was loaded from, if any
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Modification time of the source file, if known
    pub fn last_modified(&self) -> Option<DateTime<Utc>> {
        self.last_modified
    }
}

fn validate(records: &[TaxonomyRecord]) -> Result<()> {
    for (index, record) in records.iter().enumerate() {
        if let Some(level) = Level::ALL
            .into_iter()
            .find(|&level| !record.node(level).is_populated())
        {
            return Err(Error::InvalidDataset(format!(
                "record {} ({}) has no {} name",
                index, record.species.english, level
            )));
        }
    }
    debug!(records = records.len(), "Dataset validated");
    Ok(())
}
