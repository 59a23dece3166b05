//! Catalog filter primitives.
//!
//! The movie list accepts three optional filters: a free-text title search,
//! an exact genre, and an exact rating. [`MovieFilter`] normalizes the raw
//! query-string values (empty or whitespace-only means "not filtering") and
//! [`like_pattern`] builds the SQL `LIKE` pattern for the title search so
//! that `%`, `_`, and `\` in user input match literally.

/// Normalized catalog filter values. Absent fields apply no restriction;
/// present fields are AND-combined.
#[derive(Debug, Clone, Default)]
pub struct MovieFilter {
    /// Case-insensitive substring match against the title.
    pub search: Option<String>,
    /// Exact genre match, case-sensitive as stored.
    pub genre: Option<String>,
    /// Exact rating match.
    pub rating: Option<String>,
}

impl MovieFilter {
    /// Build a filter from raw query-string values, trimming whitespace and
    /// dropping empty values.
    pub fn new(search: Option<String>, genre: Option<String>, rating: Option<String>) -> Self {
        Self {
            search: normalize(search),
            genre: normalize(genre),
            rating: normalize(rating),
        }
    }

    /// The `LIKE` pattern for the title search, if a search is active.
    pub fn search_pattern(&self) -> Option<String> {
        self.search.as_deref().map(like_pattern)
    }
}

fn normalize(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Build a `%...%` `LIKE` pattern from a search string.
///
/// The text is upper-cased so both sides of the comparison normalize case
/// identically (`UPPER(title) LIKE <pattern>`), and the `LIKE`
/// metacharacters `\`, `%`, and `_` are escaped so they match literally.
/// The query must declare `ESCAPE '\'`.
pub fn like_pattern(search: &str) -> String {
    let mut escaped = String::with_capacity(search.len() + 2);
    escaped.push('%');
    for ch in search.to_uppercase().chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped.push('%');
    escaped
}
