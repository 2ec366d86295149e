//! Azure AI Search implementation of the search index provider.
//!
//! This module provides a concrete implementation of `SearchIndexProvider`
//! over the service's REST API.

mod client;
mod index_config;
mod queries;

pub use client::AzureSearchClient;
pub use index_config::{build_index_definition, DEFAULT_API_VERSION};
pub use queries::{build_index_batch, build_search_body};
