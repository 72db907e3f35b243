//! Jump from a search hit straight to its species card

use anyhow::{anyhow, bail, Result};
use serde::Serialize;
use std::io::Write;
use tracing::info;

use taxo_common::display::SpeciesCard;
use taxo_common::{search, CascadeState, TaxonPath};

use crate::output::{render_card_text, write_json, OutputFormat};
use crate::AppState;

/// Result of selecting one search hit
#[derive(Debug, Serialize)]
pub struct JumpResult {
    pub path: TaxonPath,
    /// Dataset index of the chosen record
    pub index: usize,
    /// Zero-based position of the card within the genus species list
    pub position: usize,
    pub siblings: usize,
    pub card: SpeciesCard,
}

/// Rank `query`, take the `pick`th hit (1-based) and drive the cascade through its path
pub fn resolve(state: &AppState, query: &str, pick: usize) -> Result<JumpResult> {
    let dataset = &state.dataset;
    let matches = search(query, dataset);
    if matches.is_empty() {
        bail!("No species match \"{}\"", query.trim());
    }

    let hit = pick
        .checked_sub(1)
        .and_then(|i| matches.get(i))
        .ok_or_else(|| anyhow!("--pick {} is out of range (1-{})", pick, matches.len()))?;

    let path = hit.path();
    let cascade = CascadeState::new(dataset).select_path(dataset, &path)?;
    let siblings = cascade.species_indices();
    // By dataset index: Arabic names may repeat within a genus
    let position = siblings
        .iter()
        .position(|&index| index == hit.index)
        .ok_or_else(|| anyhow!("{} missing from its own genus listing", hit.species().english))?;

    info!(
        species = %hit.species().english,
        score = hit.score,
        position,
        siblings = siblings.len(),
        "Jumped to species"
    );

    Ok(JumpResult {
        path,
        index: hit.index,
        position,
        siblings: siblings.len(),
        card: SpeciesCard::from_record(hit.record),
    })
}

pub fn run<W: Write>(state: &AppState, query: &str, pick: usize, out: &mut W) -> Result<()> {
    let result = resolve(state, query, pick)?;

    match state.format {
        OutputFormat::Json => write_json(out, &result),
        OutputFormat::Text { .. } => {
            let path: Vec<&str> = result.path.iter().map(|node| node.english.as_str()).collect();
            writeln!(out, "{}", path.join(" > "))?;
            writeln!(out, "Species {} of {}", result.position + 1, result.siblings)?;
            writeln!(out)?;
            out.write_all(render_card_text(&result.card).as_bytes())?;
            Ok(())
        }
    }
}
