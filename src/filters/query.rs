//! List Query Builder
//!
//! Joins an endpoint path with paging parameters and a filter query string.

use crate::filters::encode::encode_component;
use crate::models::GridParams;

/// Request path for a listing endpoint.
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    path: String,
    grid: GridParams,
    filters: String,
}

impl ListQuery {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    pub fn grid(mut self, grid: GridParams) -> Self {
        self.grid = grid;
        self
    }

    /// Already-encoded filter query, as produced by
    /// [`FilterStore::to_query_string`](crate::filters::FilterStore::to_query_string).
    pub fn filters(mut self, query: impl Into<String>) -> Self {
        self.filters = query.into();
        self
    }

    /// Renders `path?grid&filters`, leaving the path bare when there are no
    /// parameters. Appends with `&` if the path already has a query.
    pub fn build(&self) -> String {
        let mut params: Vec<String> = self
            .grid
            .query_pairs()
            .into_iter()
            .map(|(k, v)| format!("{}={}", k, encode_component(&v)))
            .collect();
        if !self.filters.is_empty() {
            params.push(self.filters.clone());
        }

        if params.is_empty() {
            return self.path.clone();
        }

        let sep = if self.path.contains('?') { '&' } else { '?' };
        format!("{}{}{}", self.path, sep, params.join("&"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::FilterStore;

    #[test]
    fn test_bare_path() {
        assert_eq!(ListQuery::new("/api/files").build(), "/api/files");
    }

    #[test]
    fn test_filters_only() {
        let query = ListQuery::new("/api/stats/count/files").filters("repo=archer");
        assert_eq!(query.build(), "/api/stats/count/files?repo=archer");
    }

    #[test]
    fn test_grid_and_filters() {
        let mut store = FilterStore::default();
        store.set("person", "Ana Lima").unwrap();

        let query = ListQuery::new("/api/people")
            .grid(GridParams::new().sort("name", true).page(0, 25))
            .filters(store.to_query_string(None));

        assert_eq!(
            query.build(),
            "/api/people?sort=name&asc=true&offset=0&limit=25&person=ana%20lima"
        );
    }

    #[test]
    fn test_existing_query_appends() {
        let query = ListQuery::new("/api/commits?full=1").filters("repo=x");
        assert_eq!(query.build(), "/api/commits?full=1&repo=x");
    }

    #[test]
    fn test_sort_column_is_encoded() {
        let query = ListQuery::new("/api/files").grid(GridParams::new().sort("lines total", false));
        assert_eq!(query.build(), "/api/files?sort=lines%20total&asc=false");
    }
}
