//! Subcommand implementations
//!
//! Each command reads from the shared [`AppState`] and writes its rendered
//! output to the supplied writer.

use anyhow::Result;
use std::io::Write;
use tokio::io::BufReader;

use crate::cli::{join_query, Command};
use crate::AppState;

pub mod browse;
pub mod info;
pub mod jump;
pub mod search;
pub mod watch;

/// Run `command`, reading interactive input from stdin
pub async fn dispatch<W: Write>(state: &AppState, command: Command, out: &mut W) -> Result<()> {
    match command {
        Command::Search { query } => search::run(state, &join_query(&query), out),
        Command::Browse(args) => browse::run(state, &args, out),
        Command::Jump { query, pick } => jump::run(state, &join_query(&query), pick, out),
        Command::Watch => watch::run(state, BufReader::new(tokio::io::stdin()), out).await,
        Command::Info => info::run(state, out),
    }
}
