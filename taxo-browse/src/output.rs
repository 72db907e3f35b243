//! Text and JSON rendering of command results

use anyhow::Result;
use serde::Serialize;
use std::fmt::Write as _;
use std::io::Write;

use taxo_common::display::{format_local_names, path_string, LinkKind, SpeciesCard};
use taxo_common::search::highlight_with;
use taxo_common::{highlight, CascadeState, Dataset, Level, RankedMatch, TaxonNode, TaxonPath};

const ANSI_HIGHLIGHT: &str = "\x1b[1;33m";
const ANSI_RESET: &str = "\x1b[0m";

/// How command results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text { color: bool },
    Json,
}

impl OutputFormat {
    pub fn from_flags(json: bool, color: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text { color }
        }
    }
}

/// Serialize `value` as pretty JSON followed by a newline
pub fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

fn mark(text: &str, query: &str, color: bool) -> String {
    if color {
        highlight_with(text, query, ANSI_HIGHLIGHT, ANSI_RESET)
    } else {
        text.to_string()
    }
}

/// JSON shape of one search hit
#[derive(Debug, Serialize)]
pub struct SearchHit<'a> {
    pub rank: usize,
    pub score: u32,
    pub index: usize,
    pub arabic: &'a str,
    pub english: &'a str,
    /// Arabic name wrapped in HTML highlight markup
    pub highlighted: String,
    pub local_names: String,
    pub path: TaxonPath,
    pub path_display: String,
}

#[derive(Debug, Serialize)]
struct SearchOutput<'a> {
    query: &'a str,
    results: Vec<SearchHit<'a>>,
}

pub fn search_hits<'a>(query: &str, matches: &[RankedMatch<'a>]) -> Vec<SearchHit<'a>> {
    matches
        .iter()
        .enumerate()
        .map(|(i, m)| {
            let species = m.species();
            let local_names = format_local_names(&species.local_names);
            SearchHit {
                rank: i + 1,
                score: m.score,
                index: m.index,
                arabic: &species.arabic,
                english: &species.english,
                highlighted: highlight(&species.arabic, query),
                local_names: highlight(&local_names, query),
                path: m.path(),
                path_display: path_string(m.record),
            }
        })
        .collect()
}

/// Render ranked matches for `query`
pub fn render_search(query: &str, matches: &[RankedMatch<'_>], format: OutputFormat) -> Result<String> {
    let query = query.trim();
    match format {
        OutputFormat::Json => {
            let output = SearchOutput {
                query,
                results: search_hits(query, matches),
            };
            Ok(format!("{}\n", serde_json::to_string_pretty(&output)?))
        }
        OutputFormat::Text { color } => Ok(render_search_text(query, matches, color)),
    }
}

fn render_search_text(query: &str, matches: &[RankedMatch<'_>], color: bool) -> String {
    if matches.is_empty() {
        return format!("No matches for \"{}\"\n", query);
    }

    let mut text = String::new();
    for (i, m) in matches.iter().enumerate() {
        let species = m.species();
        let local_names = format_local_names(&species.local_names);
        let _ = write!(text, "{}. {}", i + 1, mark(&species.arabic, query, color));
        if !local_names.is_empty() {
            let _ = write!(text, " {}", mark(&local_names, query, color));
        }
        let _ = writeln!(text, "  [{}]", m.score);
        let _ = writeln!(text, "   {}", path_string(m.record));
    }
    text
}

/// Multi-line text rendering of a species card
pub fn render_card_text(card: &SpeciesCard) -> String {
    let mut text = String::new();
    let _ = write!(text, "{}", card.name);
    if !card.local_names.is_empty() {
        let _ = write!(text, " {}", card.local_names);
    }
    let _ = writeln!(text);
    let _ = writeln!(text, "  الوصف: {}", card.description);
    let _ = writeln!(text, "  الموطن: {}", card.habitat);
    let _ = writeln!(text, "  {}", card.classification.arabic);
    let _ = writeln!(text, "  {}", card.classification.english);
    if !card.links.is_empty() {
        let _ = writeln!(text, "  Links:");
        for link in &card.links {
            let kind = match link.kind {
                LinkKind::Reference => "reference",
                LinkKind::Image => "image",
                LinkKind::Video => "video",
            };
            let _ = writeln!(text, "    [{}] {} <{}>", kind, link.label, link.url);
        }
    }
    text
}

fn node_label(node: &TaxonNode) -> String {
    format!("{} | {}", node.arabic, node.english)
}

/// JSON shape of a cascade snapshot
#[derive(Debug, Serialize)]
pub struct CascadeOutput<'a> {
    pub selections: Vec<Selection<'a>>,
    /// Level awaiting a choice and its options (absent once complete)
    pub pending: Option<Pending<'a>>,
    pub species: Vec<SpeciesCard>,
}

#[derive(Debug, Serialize)]
pub struct Selection<'a> {
    pub level: Level,
    pub node: &'a TaxonNode,
}

#[derive(Debug, Serialize)]
pub struct Pending<'a> {
    pub level: Level,
    pub options: &'a [TaxonNode],
}

pub fn cascade_output<'a>(state: &'a CascadeState, dataset: &Dataset) -> CascadeOutput<'a> {
    let selections = Level::ALL
        .into_iter()
        .filter_map(|level| state.selected(level).map(|node| Selection { level, node }))
        .collect();
    let pending = state.pending_level().map(|level| Pending {
        level,
        options: state.options(level),
    });
    let species = state
        .species(dataset)
        .into_iter()
        .map(SpeciesCard::from_record)
        .collect();

    CascadeOutput {
        selections,
        pending,
        species,
    }
}

pub fn render_cascade(state: &CascadeState, dataset: &Dataset, format: OutputFormat) -> Result<String> {
    let output = cascade_output(state, dataset);
    if format == OutputFormat::Json {
        return Ok(format!("{}\n", serde_json::to_string_pretty(&output)?));
    }

    let mut text = String::new();
    for selection in &output.selections {
        let _ = writeln!(text, "{}: {}", selection.level, node_label(selection.node));
    }
    if let Some(pending) = &output.pending {
        if pending.options.is_empty() {
            let _ = writeln!(text, "{}: no options", pending.level);
        } else {
            let _ = writeln!(text, "{}: choose one of", pending.level);
            for option in pending.options {
                let _ = writeln!(text, "  - {}", node_label(option));
            }
        }
    }
    if state.is_complete() {
        let _ = writeln!(text, "Species ({}):", output.species.len());
        for card in &output.species {
            let _ = writeln!(text);
            text.push_str(&render_card_text(card));
        }
    }
    Ok(text)
}
