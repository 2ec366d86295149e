//! Explicit index schema description.
//!
//! The schema is a plain value handed to the index-creation call. It is kept
//! separate from [`crate::Product`] so the record type carries no index metadata.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Data type of an index field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldType {
    /// A string field.
    #[serde(rename = "Edm.String")]
    String,
}

impl FieldType {
    /// The service's type name.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::String => "Edm.String",
        }
    }
}

/// Definition of a single field in the index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDefinition {
    pub name: String,
    pub field_type: FieldType,
    /// Whether this field is the document key.
    pub key: bool,
    /// Whether this field is full-text searchable.
    pub searchable: bool,
    pub filterable: bool,
    pub sortable: bool,
    pub facetable: bool,
    /// Whether this field is returned in search results.
    pub retrievable: bool,
}

impl FieldDefinition {
    /// A key field. Not searchable, filterable, sortable or facetable.
    pub fn key(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field_type: FieldType::String,
            key: true,
            searchable: false,
            filterable: false,
            sortable: false,
            facetable: false,
            retrievable: true,
        }
    }

    /// A full-text searchable string field.
    pub fn searchable(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field_type: FieldType::String,
            key: false,
            searchable: true,
            filterable: false,
            sortable: false,
            facetable: false,
            retrievable: true,
        }
    }
}

/// The set of fields an index is created with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexSchema {
    pub fields: Vec<FieldDefinition>,
}

impl IndexSchema {
    /// Create a schema from a list of fields.
    pub fn new(fields: Vec<FieldDefinition>) -> Self {
        Self { fields }
    }

    /// The fixed product schema: `id` key plus searchable `name` and `description`.
    pub fn product() -> Self {
        Self::new(vec![
            FieldDefinition::key("id"),
            FieldDefinition::searchable("name"),
            FieldDefinition::searchable("description"),
        ])
    }

    /// The key field, if exactly one is defined.
    pub fn key_field(&self) -> Option<&FieldDefinition> {
        let mut keys = self.fields.iter().filter(|f| f.key);
        match (keys.next(), keys.next()) {
            (Some(key), None) => Some(key),
            _ => None,
        }
    }

    /// Names of the searchable fields, in declaration order.
    pub fn searchable_fields(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|f| f.searchable)
            .map(|f| f.name.as_str())
            .collect()
    }

    /// Check the schema is usable for index creation.
    pub fn validate(&self) -> Result<(), String> {
        if self.fields.is_empty() {
            return Err("schema has no fields".to_string());
        }

        let key_count = self.fields.iter().filter(|f| f.key).count();
        if key_count != 1 {
            return Err(format!(
                "schema must have exactly one key field, found {}",
                key_count
            ));
        }

        let mut seen = HashSet::new();
        for field in &self.fields {
            if field.name.is_empty() {
                return Err("schema contains a field with an empty name".to_string());
            }
            if !seen.insert(field.name.as_str()) {
                return Err(format!("duplicate field name: {}", field.name));
            }
        }

        Ok(())
    }
}
