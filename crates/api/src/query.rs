//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Query parameters for paginated list endpoints (`?page=&search=`).
#[derive(Debug, Deserialize)]
pub struct ListParams {
    /// Zero-based page index. Missing means the first page; out-of-range
    /// values yield an empty page rather than an error.
    #[serde(default)]
    pub page: i64,
    /// Optional substring filter.
    pub search: Option<String>,
}

impl ListParams {
    /// The search term, with an empty or missing parameter treated as no
    /// filter.
    pub fn search_term(&self) -> Option<&str> {
        self.search.as_deref().filter(|s| !s.is_empty())
    }
}
