//! Loader module for the product search run.
//!
//! Reads the input file and parses it into products.

use std::collections::HashSet;
use std::io::ErrorKind;
use std::path::Path;

use tracing::{debug, info, instrument, warn};

use crate::AppError;
use product_search_shared::Product;

/// Result of reading the input file.
///
/// A missing file and an empty array are normal early-exit conditions, not errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// At least one product was read.
    Loaded(Vec<Product>),
    /// The input path does not exist.
    FileNotFound,
    /// The file holds an empty array (or `null`).
    Empty,
}

/// Read `path` and parse it as a JSON array of products.
///
/// # Returns
///
/// * `Ok(LoadOutcome)` - Products, or the reason there are none
/// * `Err(AppError::ParseError)` - If the content is not valid UTF-8 JSON, does not
///   match the product shape, or a product has an empty id
/// * `Err(AppError::IoError)` - If the file exists but cannot be read
#[instrument(skip(path), fields(path = %path.display()))]
pub async fn load_products(path: &Path) -> Result<LoadOutcome, AppError> {
    let content = match tokio::fs::read(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!("Input file not found");
            return Ok(LoadOutcome::FileNotFound);
        }
        Err(e) => return Err(e.into()),
    };

    debug!(bytes = content.len(), "Read input file");

    let products = parse_products(&content)
        .map_err(|e| AppError::parse(format!("{}: {}", path.display(), e)))?;

    if products.is_empty() {
        warn!("Input file contains no products");
        return Ok(LoadOutcome::Empty);
    }

    let duplicates = count_duplicate_ids(&products);
    if duplicates > 0 {
        // The service merges documents sharing a key; the last one wins.
        warn!(duplicates, "Input contains repeated product ids");
    }

    info!(count = products.len(), "Loaded products");
    Ok(LoadOutcome::Loaded(products))
}

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Parse file content into products.
///
/// A leading UTF-8 byte-order mark is ignored. Bytes that are not UTF-8 fail
/// like any other malformed JSON.
fn parse_products(content: &[u8]) -> Result<Vec<Product>, String> {
    let content = content.strip_prefix(UTF8_BOM).unwrap_or(content);
    let products: Option<Vec<Product>> = serde_json::from_slice(content).map_err(|e| {
        format!(
            "invalid product JSON at line {} column {}: {}",
            e.line(),
            e.column(),
            e
        )
    })?;
    let products = products.unwrap_or_default();

    for (position, product) in products.iter().enumerate() {
        product
            .validate()
            .map_err(|e| format!("record {}: {}", position, e))?;
    }

    Ok(products)
}

fn count_duplicate_ids(products: &[Product]) -> usize {
    let mut seen = HashSet::new();
    products
        .iter()
        .filter(|p| !seen.insert(p.id.as_str()))
        .count()
}
