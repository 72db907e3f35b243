//! Live search over a line-oriented input stream
//!
//! Every line is a new query submitted to one shared debouncer, so only the
//! latest query of a burst is evaluated and printed.

use anyhow::Result;
use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use taxo_common::{search, QueryDebouncer};

use crate::output::{render_search, OutputFormat};
use crate::AppState;

/// Run until `input` is exhausted and every pending query has resolved
pub async fn run<R, W>(state: &AppState, input: R, out: &mut W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let debouncer = QueryDebouncer::new(state.debounce);
    let (tx, mut rx) = mpsc::unbounded_channel::<String>();
    // Dropped at end of input so the channel closes once pending tasks finish
    let mut tx = Some(tx);
    let mut lines = input.lines();
    let mut input_open = true;

    info!(debounce_ms = state.debounce.as_millis() as u64, "Watching input for queries");

    loop {
        tokio::select! {
            line = lines.next_line(), if input_open => {
                match line? {
                    Some(line) => {
                        let Some(sender) = tx.clone() else {
                            continue;
                        };
                        // Ticket order follows input order, not task scheduling
                        let ticket = debouncer.ticket();
                        let debouncer = debouncer.clone();
                        let dataset = Arc::clone(&state.dataset);
                        let format = state.format;

                        tokio::spawn(async move {
                            let Some(query) = debouncer.settle(ticket, &line).await else {
                                return;
                            };
                            let matches = search(&query, &dataset);
                            let rendered = match render_search(&query, &matches, format) {
                                Ok(rendered) => rendered,
                                Err(e) => {
                                    warn!("Failed to render results for '{}': {}", query, e);
                                    return;
                                }
                            };
                            let block = match format {
                                OutputFormat::Text { .. } => format!("Query: {}\n{}\n", query, rendered),
                                OutputFormat::Json => rendered,
                            };
                            let _ = sender.send(block);
                        });
                    }
                    None => {
                        debug!("Input closed");
                        input_open = false;
                        tx = None;
                    }
                }
            }
            block = rx.recv() => {
                match block {
                    Some(block) => {
                        out.write_all(block.as_bytes())?;
                        out.flush()?;
                    }
                    None => break,
                }
            }
        }
    }

    Ok(())
}
