//! Cascading drill-down by English level names

use anyhow::{Context, Result};
use std::io::Write;

use taxo_common::{CascadeError, CascadeState, Level};

use crate::cli::BrowseArgs;
use crate::output::render_cascade;
use crate::AppState;

/// Apply every given level top-down, starting from the initial state
///
/// `--clear` is applied last, as if that level's choice were blanked.
///
/// # Errors
/// A level given without its predecessors, or a name that is not among the
/// level's options, stops the walk.
pub fn resolve(state: &AppState, args: &BrowseArgs) -> Result<CascadeState> {
    let dataset = &state.dataset;
    let mut cascade = CascadeState::new(dataset);

    for level in Level::ALL {
        let Some(name) = args.get(level) else {
            continue;
        };
        cascade = match cascade.select_by_english(dataset, level, name) {
            Ok(next) => next,
            Err(e @ CascadeError::UnknownOption { .. }) => {
                let available: Vec<&str> = cascade
                    .options(level)
                    .iter()
                    .map(|node| node.english.as_str())
                    .collect();
                return Err(e).with_context(|| {
                    format!("available {} options: {}", level, available.join(", "))
                });
            }
            Err(e) => return Err(e.into()),
        };
    }

    if let Some(level) = args.clear {
        cascade = cascade.clear(dataset, level);
    }

    Ok(cascade)
}

pub fn run<W: Write>(state: &AppState, args: &BrowseArgs, out: &mut W) -> Result<()> {
    let cascade = resolve(state, args)?;
    out.write_all(render_cascade(&cascade, &state.dataset, state.format)?.as_bytes())?;
    Ok(())
}
