//! Dependency initialization and wiring for a product search run.

use tracing::info;

use crate::config::AppConfig;
use crate::orchestrator::Orchestrator;
use crate::reporter::Reporter;
use crate::AppError;
use product_search_repository::{AzureSearchClient, SearchIndexClient};

/// Container for all initialized dependencies.
pub struct Dependencies {
    /// The configured orchestrator ready to run.
    pub orchestrator: Orchestrator,
}

impl Dependencies {
    /// Build the REST client and orchestrator from a validated config.
    ///
    /// # Returns
    ///
    /// * `Ok(Dependencies)` - Initialized dependencies
    /// * `Err(AppError)` - If the config is incomplete or the endpoint is invalid
    pub fn new(config: AppConfig) -> Result<Self, AppError> {
        config.validate()?;

        info!(
            endpoint = %config.endpoint,
            index = %config.index_name,
            input = %config.input_path.display(),
            "Initializing dependencies"
        );

        let provider = AzureSearchClient::with_api_version(
            &config.endpoint,
            config.credential.clone(),
            config.api_version.clone(),
        )
        .map_err(|e| AppError::config(format!("Failed to create search client: {}", e)))?;

        let client = SearchIndexClient::new(Box::new(provider));
        let orchestrator = Orchestrator::new(client, config, Reporter::stdout());

        Ok(Self { orchestrator })
    }
}
