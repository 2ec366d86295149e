//! Error types for the product search repository.

mod search_index_error;

pub use search_index_error::SearchIndexError;
