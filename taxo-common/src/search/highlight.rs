//! Match highlighting for search result display
//!
//! The query is always treated as a literal: regex metacharacters are
//! escaped before matching.

use regex::RegexBuilder;
use tracing::warn;

/// Default opening marker (HTML span)
pub const HIGHLIGHT_OPEN: &str = r#"<span class="highlight">"#;
/// Default closing marker
pub const HIGHLIGHT_CLOSE: &str = "</span>";

/// Wrap every case-insensitive occurrence of `query` in highlight markup
///
/// # Examples
/// ```
/// use taxo_common::search::highlight;
///
/// assert_eq!(
///     highlight("Bengal Tiger", "tiger"),
///     r#"Bengal <span class="highlight">Tiger</span>"#
/// );
/// // Metacharacters match literally
/// assert_eq!(highlight("a.b axb", "a.b"), r#"<span class="highlight">a.b</span> axb"#);
/// ```
pub fn highlight(text: &str, query: &str) -> String {
    highlight_with(text, query, HIGHLIGHT_OPEN, HIGHLIGHT_CLOSE)
}

/// Like [`highlight`] with caller-supplied markers
pub fn highlight_with(text: &str, query: &str, open: &str, close: &str) -> String {
    if query.is_empty() {
        return text.to_string();
    }

    let pattern = match RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
    {
        Ok(pattern) => pattern,
        Err(e) => {
            warn!(query = %query, error = %e, "Highlight pattern rejected, returning text unchanged");
            return text.to_string();
        }
    };

    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for m in pattern.find_iter(text) {
        out.push_str(&text[last..m.start()]);
        out.push_str(open);
        out.push_str(m.as_str());
        out.push_str(close);
        last = m.end();
    }
    out.push_str(&text[last..]);
    out
}
