//! Search index provider trait definition.
//!
//! This module defines the abstract interface for remote index operations,
//! allowing the REST backend to be replaced by in-memory implementations in tests.

use async_trait::async_trait;

use crate::errors::SearchIndexError;
use crate::types::{BatchOperationSummary, DeleteIndexOutcome};
use product_search_shared::{IndexSchema, Product, SearchQuery, SearchResponse};

/// Abstracts the remote search service.
///
/// Implementations are injected into `SearchIndexClient` to enable dependency
/// injection and easy testing with mock implementations. Every call is a single
/// request/response round trip; implementations do not retry.
///
/// All methods return `Result<T, SearchIndexError>` for consistent error handling across
/// different backend implementations.
#[async_trait]
pub trait SearchIndexProvider: Send + Sync {
    /// Delete the index with the given name.
    ///
    /// # Returns
    ///
    /// * `Ok(DeleteIndexOutcome::Deleted)` - If the index existed and was removed
    /// * `Ok(DeleteIndexOutcome::NotFound)` - If the service reports the index does not exist
    /// * `Err(SearchIndexError)` - For any other failure (authorization, transport, ...)
    async fn delete_index(&self, name: &str) -> Result<DeleteIndexOutcome, SearchIndexError>;

    /// Create the index, or overwrite its definition if it already exists.
    ///
    /// # Arguments
    ///
    /// * `name` - The index name
    /// * `schema` - The field definitions the index is created with
    async fn create_or_update_index(
        &self,
        name: &str,
        schema: &IndexSchema,
    ) -> Result<(), SearchIndexError>;

    /// Submit all products to the named index as one batch, each tagged merge-or-upload.
    ///
    /// # Returns
    ///
    /// * `Ok(BatchOperationSummary)` - Per-item outcomes as reported by the service
    /// * `Err(SearchIndexError)` - If the request as a whole fails
    async fn merge_or_upload_documents(
        &self,
        index: &str,
        products: &[Product],
    ) -> Result<BatchOperationSummary, SearchIndexError>;

    /// Execute a full-text query against the named index and return the first
    /// page of scored matches, ordered by descending score.
    async fn search(
        &self,
        index: &str,
        query: &SearchQuery,
    ) -> Result<SearchResponse, SearchIndexError>;
}
