//! Index definitions for the REST API.
//!
//! Maps an [`IndexSchema`] to the JSON index definition the service expects.

use serde_json::{json, Value};

use product_search_shared::{FieldDefinition, IndexSchema};

/// REST API version sent with every request unless overridden.
pub const DEFAULT_API_VERSION: &str = "2024-07-01";

/// Build the index definition body for a create-or-update request.
///
/// Every field carries all attribute flags explicitly so that an overwrite
/// leaves exactly this schema in place.
pub fn build_index_definition(name: &str, schema: &IndexSchema) -> Value {
    let fields: Vec<Value> = schema.fields.iter().map(field_definition).collect();

    json!({
        "name": name,
        "fields": fields
    })
}

fn field_definition(field: &FieldDefinition) -> Value {
    json!({
        "name": field.name,
        "type": field.field_type.as_str(),
        "key": field.key,
        "searchable": field.searchable,
        "filterable": field.filterable,
        "sortable": field.sortable,
        "facetable": field.facetable,
        "retrievable": field.retrievable
    })
}
