//! Orchestrator module for a product search run.
//!
//! Runs index reset, load, upload and query strictly in that order.

use tracing::{info, instrument};

use crate::config::AppConfig;
use crate::loader::{load_products, LoadOutcome};
use crate::reporter::Reporter;
use crate::AppError;
use product_search_repository::{DeleteIndexOutcome, SearchIndexClient};
use product_search_shared::{IndexSchema, Product, SearchQuery, SearchResponse};

/// What a completed run did.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    /// Whether an existing index was replaced.
    pub delete_outcome: DeleteIndexOutcome,
    /// Number of products uploaded.
    pub uploaded: usize,
    /// Results of the sample query.
    pub response: SearchResponse,
}

/// How a run ended without error.
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// Every stage ran.
    Completed(RunSummary),
    /// The input file does not exist; nothing was uploaded or queried.
    InputFileMissing,
    /// The input file held no products; nothing was uploaded or queried.
    NoProducts,
}

/// Orchestrator that sequences the run.
///
/// The orchestrator:
/// - Recreates the index from the fixed product schema
/// - Loads products from the configured file
/// - Uploads them as one merge-or-upload batch
/// - Runs the sample query and reports the results
///
/// Each stage awaits the previous one; nothing runs concurrently and nothing is retried.
pub struct Orchestrator {
    client: SearchIndexClient,
    config: AppConfig,
    schema: IndexSchema,
    reporter: Reporter,
}

impl Orchestrator {
    /// Create a new orchestrator for the product schema.
    pub fn new(client: SearchIndexClient, config: AppConfig, reporter: Reporter) -> Self {
        Self::with_schema(client, config, IndexSchema::product(), reporter)
    }

    /// Create a new orchestrator with a custom index schema.
    pub fn with_schema(
        client: SearchIndexClient,
        config: AppConfig,
        schema: IndexSchema,
        reporter: Reporter,
    ) -> Self {
        Self {
            client,
            config,
            schema,
            reporter,
        }
    }

    /// Run the pipeline.
    ///
    /// A missing input file or an empty product list ends the run early with
    /// `Ok`. Any other failure is returned and no later stage runs.
    #[instrument(skip(self), fields(index = %self.config.index_name))]
    pub async fn run(&mut self) -> Result<RunOutcome, AppError> {
        info!("Starting product search run");

        let delete_outcome = self.reset_index().await?;

        let products = match self.load().await? {
            LoadOutcome::Loaded(products) => products,
            LoadOutcome::FileNotFound => {
                self.reporter.file_not_found(&self.config.input_path)?;
                return Ok(RunOutcome::InputFileMissing);
            }
            LoadOutcome::Empty => {
                self.reporter.no_products(&self.config.input_path)?;
                return Ok(RunOutcome::NoProducts);
            }
        };

        let uploaded = self.upload(&products).await?;
        let response = self.query().await?;

        info!(
            uploaded,
            hits = response.len(),
            "Product search run complete"
        );

        Ok(RunOutcome::Completed(RunSummary {
            delete_outcome,
            uploaded,
            response,
        }))
    }

    /// Delete the index if it exists and recreate it.
    #[instrument(skip(self))]
    async fn reset_index(&mut self) -> Result<DeleteIndexOutcome, AppError> {
        let index = &self.config.index_name;

        let outcome = self.client.reset_index(index, &self.schema).await?;

        self.reporter.index_deleted(index, outcome)?;
        self.reporter.index_created(index)?;

        Ok(outcome)
    }

    #[instrument(skip(self))]
    async fn load(&self) -> Result<LoadOutcome, AppError> {
        load_products(&self.config.input_path).await
    }

    /// Upload all products as a single batch.
    #[instrument(skip(self, products), fields(count = products.len()))]
    async fn upload(&mut self, products: &[Product]) -> Result<usize, AppError> {
        let summary = self
            .client
            .upload(&self.config.index_name, products)
            .await?;

        self.reporter.uploaded(summary.succeeded)?;
        Ok(summary.succeeded)
    }

    /// Run the sample query and print the results.
    #[instrument(skip(self), fields(text = %self.config.query_text))]
    async fn query(&mut self) -> Result<SearchResponse, AppError> {
        let query = SearchQuery::new(self.config.query_text.clone()).with_top(self.config.top);

        let response = self.client.query(&self.config.index_name, &query).await?;

        self.reporter.results(&response)?;
        Ok(response)
    }
}
