//! The product record uploaded to the search index.

use serde::{Deserialize, Serialize};

/// A single product as read from the input file and stored in the index.
///
/// `id` is the index key. `name` and `description` are full-text searchable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique key of the document.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Free-text description.
    pub description: String,
}

impl Product {
    /// Create a new product.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
        }
    }

    /// Check that the record can be used as an index document.
    ///
    /// Returns a description of the problem when the key is missing.
    pub fn validate(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err(format!("product '{}' has an empty id", self.name));
        }
        Ok(())
    }
}
