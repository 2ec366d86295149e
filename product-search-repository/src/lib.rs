//! # Product Search Repository
//!
//! This crate provides traits and implementations for interacting with the
//! remote search service. It includes definitions for errors, interfaces, and a
//! concrete implementation for Azure AI Search.

pub mod azure;
pub mod client;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod types;

pub use azure::AzureSearchClient;
pub use client::SearchIndexClient;
pub use config::SearchIndexConfig;
pub use errors::SearchIndexError;
pub use interfaces::SearchIndexProvider;
pub use types::{BatchOperationResult, BatchOperationSummary, DeleteIndexOutcome, IndexAction};
