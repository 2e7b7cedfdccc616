//! Search-term highlighting for result snippets.

use regex::Regex;

/// Wraps case-insensitive occurrences of `term` in `<mark>` markup.
///
/// An empty term returns the text unchanged. The term is escaped before
/// matching, so regex metacharacters in user queries are literal.
pub fn highlight_search_term(text: &str, term: &str) -> String {
    if term.is_empty() {
        return text.to_string();
    }

    let pattern = format!("(?i)({})", regex::escape(term));
    match Regex::new(&pattern) {
        Ok(re) => re
            .replace_all(text, "<mark class=\"bg-warning text-dark\">$1</mark>")
            .into_owned(),
        Err(_) => text.to_string(),
    }
}
