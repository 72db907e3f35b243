use anyhow::Result;
use chrono::{DateTime, Local, Utc};
use serde::Serialize;
use std::io::Write;

use taxo_common::{CascadeState, Level};

use crate::output::{write_json, OutputFormat};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct DatasetInfo {
    pub source: Option<String>,
    pub records: usize,
    pub kingdoms: usize,
    pub last_modified: Option<DateTime<Utc>>,
}

pub fn collect(state: &AppState) -> DatasetInfo {
    let dataset = &state.dataset;
    DatasetInfo {
        source: dataset.source().map(|path| path.display().to_string()),
        records: dataset.len(),
        kingdoms: CascadeState::new(dataset).options(Level::Kingdom).len(),
        last_modified: dataset.last_modified(),
    }
}

/// "October 14, 2026 03:04 PM" in local time
pub fn format_last_updated(timestamp: DateTime<Utc>) -> String {
    timestamp
        .with_timezone(&Local)
        .format("%B %-d, %Y %I:%M %p")
        .to_string()
}

pub fn run<W: Write>(state: &AppState, out: &mut W) -> Result<()> {
    let info = collect(state);

    match state.format {
        OutputFormat::Json => write_json(out, &info),
        OutputFormat::Text { .. } => {
            writeln!(out, "Dataset: {}", info.source.as_deref().unwrap_or("(in memory)"))?;
            writeln!(out, "Records: {}", info.records)?;
            writeln!(out, "Kingdoms: {}", info.kingdoms)?;
            if let Some(timestamp) = info.last_modified {
                writeln!(out, "Last updated: {}", format_last_updated(timestamp))?;
            }
            Ok(())
        }
    }
}
