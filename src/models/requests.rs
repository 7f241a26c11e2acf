//! Request parameter models
//!
//! Parameters the dashboard server accepts on its listing endpoints.

use serde::{Deserialize, Serialize};

/// Paging and sorting parameters for listing endpoints
/// (`/api/files`, `/api/repos`, `/api/commits`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridParams {
    /// Column to sort by
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    /// Ascending order when true
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asc: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

impl GridParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sort(mut self, column: impl Into<String>, asc: bool) -> Self {
        self.sort = Some(column.into());
        self.asc = Some(asc);
        self
    }

    pub fn page(mut self, offset: usize, limit: usize) -> Self {
        self.offset = Some(offset);
        self.limit = Some(limit);
        self
    }

    /// Set parameters as `(name, value)` pairs in the order
    /// `sort`, `asc`, `offset`, `limit`.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(sort) = self.sort.as_deref().filter(|s| !s.is_empty()) {
            pairs.push(("sort", sort.to_string()));
        }
        if let Some(asc) = self.asc {
            pairs.push(("asc", asc.to_string()));
        }
        if let Some(offset) = self.offset {
            pairs.push(("offset", offset.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        pairs
    }
}
