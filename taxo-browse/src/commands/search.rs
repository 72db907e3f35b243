use anyhow::Result;
use std::io::Write;
use tracing::info;

use taxo_common::search;

use crate::output::render_search;
use crate::AppState;

/// One-shot ranked search
pub fn run<W: Write>(state: &AppState, query: &str, out: &mut W) -> Result<()> {
    let matches = search(query, &state.dataset);
    info!(query = %query.trim(), results = matches.len(), "Search");

    out.write_all(render_search(query, &matches, state.format)?.as_bytes())?;
    Ok(())
}
