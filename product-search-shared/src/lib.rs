//! # Product Search Shared
//!
//! Types shared between the remote index layer and the loader binary:
//! the product record, the explicit index schema, and search request and
//! response values.

pub mod product;
pub mod schema;
pub mod search;

pub use product::Product;
pub use schema::{FieldDefinition, FieldType, IndexSchema};
pub use search::{SearchHit, SearchQuery, SearchResponse, DEFAULT_TOP};
