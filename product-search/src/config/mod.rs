//! Configuration for a product search run.

mod dependencies;

pub use dependencies::Dependencies;

use std::fmt;
use std::path::PathBuf;

use clap::Parser;

use crate::AppError;
use product_search_repository::azure::DEFAULT_API_VERSION;
use product_search_shared::DEFAULT_TOP;

/// Default sample query text.
pub const DEFAULT_QUERY: &str = "formulation";

/// Everything a run needs, passed explicitly into the orchestrator.
///
/// Each option can be given on the command line or through the environment
/// (a `.env` file in the working directory is loaded first).
#[derive(Parser, Clone)]
#[command(name = "product-search")]
#[command(about = "Recreate the product search index, upload products and run a sample query", long_about = None)]
pub struct AppConfig {
    /// Search service endpoint, e.g. https://my-service.search.windows.net
    #[arg(long, env = "SEARCH_ENDPOINT")]
    pub endpoint: String,

    /// Admin API key for the search service
    #[arg(long = "api-key", env = "SEARCH_API_KEY", hide_env_values = true)]
    pub credential: String,

    /// Name of the index to recreate
    #[arg(long, env = "SEARCH_INDEX_NAME")]
    pub index_name: String,

    /// JSON file containing an array of products
    #[arg(long, env = "SEARCH_INPUT_PATH")]
    pub input_path: PathBuf,

    /// Text of the sample query
    #[arg(long = "query", env = "SEARCH_QUERY", default_value = DEFAULT_QUERY)]
    pub query_text: String,

    /// Number of results to print
    #[arg(long, env = "SEARCH_TOP", default_value_t = DEFAULT_TOP)]
    pub top: usize,

    /// REST API version
    #[arg(long, env = "SEARCH_API_VERSION", default_value = DEFAULT_API_VERSION)]
    pub api_version: String,
}

impl AppConfig {
    /// Create a config with the default query, page size and API version.
    pub fn new(
        endpoint: impl Into<String>,
        credential: impl Into<String>,
        index_name: impl Into<String>,
        input_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            credential: credential.into(),
            index_name: index_name.into(),
            input_path: input_path.into(),
            query_text: DEFAULT_QUERY.to_string(),
            top: DEFAULT_TOP,
            api_version: DEFAULT_API_VERSION.to_string(),
        }
    }

    /// Check that the required connection settings are present.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.endpoint.trim().is_empty() {
            return Err(AppError::config("endpoint is required"));
        }
        if self.credential.trim().is_empty() {
            return Err(AppError::config("api key is required"));
        }
        if self.index_name.trim().is_empty() {
            return Err(AppError::config("index name is required"));
        }
        if self.top == 0 {
            return Err(AppError::config("top must be at least 1"));
        }
        Ok(())
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("endpoint", &self.endpoint)
            .field("credential", &"<redacted>")
            .field("index_name", &self.index_name)
            .field("input_path", &self.input_path)
            .field("query_text", &self.query_text)
            .field("top", &self.top)
            .field("api_version", &self.api_version)
            .finish()
    }
}
