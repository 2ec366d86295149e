//! Request body builders and response parsers for document operations.

use serde_json::{json, Map, Value};
use tracing::warn;

use crate::errors::SearchIndexError;
use crate::types::{BatchOperationResult, BatchOperationSummary, IndexAction};
use product_search_shared::{Product, SearchHit, SearchQuery, SearchResponse};

/// Build the body of a document indexing request.
///
/// Each product becomes one action carrying all of its fields.
pub fn build_index_batch(products: &[Product], action: IndexAction) -> Value {
    let actions: Vec<Value> = products
        .iter()
        .map(|product| {
            json!({
                "@search.action": action.as_str(),
                "id": product.id,
                "name": product.name,
                "description": product.description
            })
        })
        .collect();

    json!({ "value": actions })
}

/// Build the body of a search request.
///
/// An empty query text matches every document.
pub fn build_search_body(query: &SearchQuery) -> Value {
    let text = if query.text.trim().is_empty() {
        "*"
    } else {
        query.text.as_str()
    };

    json!({
        "search": text,
        "top": query.top,
        "count": query.include_total_count
    })
}

/// Parse the per-item results of an indexing request.
pub fn parse_index_response(body: &Value) -> Result<BatchOperationSummary, SearchIndexError> {
    let items = body
        .get("value")
        .and_then(Value::as_array)
        .ok_or_else(|| SearchIndexError::parse("indexing response has no 'value' array"))?;

    let results = items
        .iter()
        .map(|item| {
            let key = item
                .get("key")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            let success = item.get("status").and_then(Value::as_bool).unwrap_or(false);
            let status_code = item
                .get("statusCode")
                .and_then(Value::as_u64)
                .and_then(|code| u16::try_from(code).ok())
                .unwrap_or(0);
            let error = item
                .get("errorMessage")
                .and_then(Value::as_str)
                .map(String::from);

            BatchOperationResult {
                key,
                success,
                status_code,
                error,
            }
        })
        .collect();

    Ok(BatchOperationSummary::from_results(results))
}

/// Parse a search response body into scored hits.
///
/// Hits without a key are skipped.
pub fn parse_search_response(body: &Value) -> Result<SearchResponse, SearchIndexError> {
    let values = body
        .get("value")
        .and_then(Value::as_array)
        .ok_or_else(|| SearchIndexError::parse("search response has no 'value' array"))?;

    let hits = values
        .iter()
        .filter_map(|value| {
            let hit = parse_hit(value);
            if hit.is_none() {
                warn!(hit = %value, "Skipping search hit without an id");
            }
            hit
        })
        .collect();

    let total_count = body.get("@odata.count").and_then(Value::as_u64);

    Ok(SearchResponse { total_count, hits })
}

/// Parse a single search hit.
pub(crate) fn parse_hit(hit: &Value) -> Option<SearchHit> {
    let fields: &Map<String, Value> = hit.as_object()?;

    let id = fields.get("id").and_then(Value::as_str)?.to_string();
    let text = |name: &str| {
        fields
            .get(name)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };
    let score = fields
        .get("@search.score")
        .and_then(Value::as_f64)
        .unwrap_or(0.0);

    Some(SearchHit {
        score,
        product: Product {
            id,
            name: text("name"),
            description: text("description"),
        },
    })
}
