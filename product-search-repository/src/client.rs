//! Search index client implementation.
//!
//! This module provides the main client for interacting with the remote index.
//! Application code uses this to reset the index, upload products, and query.

use tracing::{info, warn};

use crate::config::SearchIndexConfig;
use crate::errors::SearchIndexError;
use crate::interfaces::SearchIndexProvider;
use crate::types::{BatchOperationSummary, DeleteIndexOutcome};
use product_search_shared::{IndexSchema, Product, SearchQuery, SearchResponse};

/// Longest index name the service accepts.
const MAX_INDEX_NAME_LEN: usize = 128;

/// The main client for interacting with the search index.
/// Validates inputs, then delegates to the injected provider.
pub struct SearchIndexClient {
    provider: Box<dyn SearchIndexProvider>,
    config: SearchIndexConfig,
}

impl SearchIndexClient {
    /// Create a new SearchIndexClient with default configuration.
    pub fn new(provider: Box<dyn SearchIndexProvider>) -> Self {
        Self {
            provider,
            config: SearchIndexConfig::default(),
        }
    }

    /// Create a new SearchIndexClient with custom configuration.
    pub fn with_config(provider: Box<dyn SearchIndexProvider>, config: SearchIndexConfig) -> Self {
        Self { provider, config }
    }

    /// Check if batch size exceeds the configured limit.
    fn validate_batch_size(&self, size: usize) -> Result<(), SearchIndexError> {
        if let Some(max) = self.config.max_batch_size {
            if size > max {
                return Err(SearchIndexError::batch_size_exceeded(size, max));
            }
        }
        Ok(())
    }

    /// Check an index name against the service's naming rules:
    /// lowercase letters, digits and dashes, not starting or ending with a dash.
    pub fn validate_index_name(name: &str) -> Result<(), SearchIndexError> {
        if name.is_empty() {
            return Err(SearchIndexError::validation("index name is required"));
        }
        if name.len() > MAX_INDEX_NAME_LEN {
            return Err(SearchIndexError::validation(format!(
                "index name exceeds {} characters",
                MAX_INDEX_NAME_LEN
            )));
        }
        if !name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return Err(SearchIndexError::validation(format!(
                "index name '{}' may only contain lowercase letters, digits and dashes",
                name
            )));
        }
        if name.starts_with('-') || name.ends_with('-') {
            return Err(SearchIndexError::validation(format!(
                "index name '{}' must not start or end with a dash",
                name
            )));
        }
        Ok(())
    }

    /// Delete the index if it exists, then create it from `schema`.
    /// Input: index name, field schema
    /// Output: Result<DeleteIndexOutcome, SearchIndexError>
    ///
    /// This is a destructive reset: any documents previously stored under
    /// `name` are gone once this returns. A missing index is not an error.
    pub async fn reset_index(
        &self,
        name: &str,
        schema: &IndexSchema,
    ) -> Result<DeleteIndexOutcome, SearchIndexError> {
        Self::validate_index_name(name)?;
        schema.validate().map_err(SearchIndexError::validation)?;

        let outcome = self.provider.delete_index(name).await?;
        match outcome {
            DeleteIndexOutcome::Deleted => info!(index = %name, "Deleted index"),
            DeleteIndexOutcome::NotFound => {
                warn!(index = %name, "Index does not exist, proceeding to create it")
            }
        }

        self.provider.create_or_update_index(name, schema).await?;
        info!(index = %name, fields = schema.fields.len(), "Created index");

        Ok(outcome)
    }

    /// Upload products to the index as a single merge-or-upload batch.
    /// Input: index name, non-empty slice of products
    /// Output: Result<BatchOperationSummary, SearchIndexError>
    ///
    /// Any item the service rejects fails the whole call with a
    /// `BulkOperationError` naming the rejected keys.
    ///
    /// The batch size is limited by the configured max_batch_size (default: 1000).
    pub async fn upload(
        &self,
        name: &str,
        products: &[Product],
    ) -> Result<BatchOperationSummary, SearchIndexError> {
        Self::validate_index_name(name)?;

        if products.is_empty() {
            return Err(SearchIndexError::validation("no products to upload"));
        }

        self.validate_batch_size(products.len())?;

        for product in products {
            product.validate().map_err(SearchIndexError::validation)?;
        }

        let summary = self
            .provider
            .merge_or_upload_documents(name, products)
            .await?;

        if !summary.is_success() {
            let failed = summary.failed_keys().join(", ");
            warn!(
                index = %name,
                failed = summary.failed,
                total = summary.total,
                "Service rejected documents"
            );
            return Err(SearchIndexError::bulk_operation(format!(
                "{} of {} documents rejected (keys: {})",
                summary.failed, summary.total, failed
            )));
        }

        info!(index = %name, count = summary.succeeded, "Uploaded documents");
        Ok(summary)
    }

    /// Query the search index.
    /// Input: index name, SearchQuery (text, page size, total-count flag)
    /// Output: Result<SearchResponse, SearchIndexError> (ordered by relevance)
    pub async fn query(
        &self,
        name: &str,
        query: &SearchQuery,
    ) -> Result<SearchResponse, SearchIndexError> {
        Self::validate_index_name(name)?;

        if query.top == 0 {
            return Err(SearchIndexError::validation("top must be at least 1"));
        }

        self.provider.search(name, query).await
    }
}
