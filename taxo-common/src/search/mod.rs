//! Free-text species search
//!
//! - `matcher`: multi-field scoring and top-N ranking
//! - `highlight`: literal, case-insensitive match highlighting
//! - `debounce`: latest-wins gating of rapidly changing queries

pub mod debounce;
pub mod highlight;
pub mod matcher;

pub use debounce::{QueryDebouncer, Ticket};
pub use highlight::{highlight, highlight_with};
pub use matcher::{normalize_query, score_species, search, RankedMatch, MAX_RESULTS, MIN_QUERY_CHARS};
