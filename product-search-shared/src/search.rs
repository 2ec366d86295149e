//! Search request and response values.

use serde::{Deserialize, Serialize};

use crate::Product;

/// Default number of results requested per query.
pub const DEFAULT_TOP: usize = 5;

/// A full-text query against the product index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    /// The query text.
    pub text: String,
    /// Maximum number of results to return.
    pub top: usize,
    /// Whether the service should report the total match count.
    pub include_total_count: bool,
}

impl SearchQuery {
    /// Create a query for the first page of results with the total count requested.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            top: DEFAULT_TOP,
            include_total_count: true,
        }
    }

    /// Set the page size.
    pub fn with_top(mut self, top: usize) -> Self {
        self.top = top;
        self
    }

    /// Set whether the total count is requested.
    pub fn with_total_count(mut self, include: bool) -> Self {
        self.include_total_count = include;
        self
    }
}

/// A single scored match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Relevance score assigned by the service.
    pub score: f64,
    pub product: Product,
}

/// Results of a query, ordered by descending score.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Total number of matches, when requested.
    pub total_count: Option<u64>,
    pub hits: Vec<SearchHit>,
}

impl SearchResponse {
    /// Number of hits in this page.
    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_defaults() {
        let query = SearchQuery::new("formulation");

        assert_eq!(query.text, "formulation");
        assert_eq!(query.top, 5);
        assert!(query.include_total_count);
    }

    #[test]
    fn test_query_builder() {
        let query = SearchQuery::new("serum").with_top(10).with_total_count(false);

        assert_eq!(query.top, 10);
        assert!(!query.include_total_count);
    }

    #[test]
    fn test_empty_response() {
        let response = SearchResponse::default();
        assert!(response.is_empty());
        assert_eq!(response.len(), 0);
        assert!(response.total_count.is_none());
    }
}
