//! # Product Search
//!
//! Recreates a product search index, bulk-uploads products from a local JSON
//! file and runs one sample query.
//!
//! ## Architecture
//!
//! The run is a single sequential pipeline:
//!
//! 1. **Config**: Endpoint, credential, index name and input path
//! 2. **Index reset**: Delete the index if present, then create it from the fixed schema
//! 3. **Loader**: Read and parse the product file
//! 4. **Upload**: Submit all products as one merge-or-upload batch
//! 5. **Query**: Run the sample query and report scored results

pub mod config;
pub mod loader;
pub mod orchestrator;
pub mod reporter;

pub use config::{AppConfig, Dependencies};
pub use loader::{load_products, LoadOutcome};
pub use orchestrator::{Orchestrator, RunOutcome, RunSummary};
pub use reporter::Reporter;

use thiserror::Error;

/// Errors that end a run.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The input file is not a JSON array of products.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Search service error.
    #[error("Search error: {0}")]
    SearchError(#[from] product_search_repository::SearchIndexError),

    /// IO error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl AppError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::ParseError(msg.into())
    }
}
