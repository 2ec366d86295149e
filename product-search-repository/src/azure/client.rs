//! Azure AI Search client implementation.
//!
//! This module provides the concrete implementation of `SearchIndexProvider`
//! over the service's REST API using `reqwest`.

use async_trait::async_trait;
use reqwest::{header::CONTENT_TYPE, Client, Method, RequestBuilder, Response, StatusCode};
use serde_json::Value;
use tracing::{debug, error, info, instrument};
use url::Url;
use uuid::Uuid;

use crate::azure::index_config::{build_index_definition, DEFAULT_API_VERSION};
use crate::azure::queries::{
    build_index_batch, build_search_body, parse_index_response, parse_search_response,
};
use crate::errors::SearchIndexError;
use crate::interfaces::SearchIndexProvider;
use crate::types::{BatchOperationSummary, DeleteIndexOutcome, IndexAction};
use product_search_shared::{IndexSchema, Product, SearchQuery, SearchResponse};

const API_KEY_HEADER: &str = "api-key";
const CLIENT_REQUEST_ID_HEADER: &str = "client-request-id";

/// Azure AI Search client implementation.
///
/// Holds the service endpoint and admin key. Index names are passed per call.
///
/// # Example
///
/// ```ignore
/// let client = AzureSearchClient::new("https://my-service.search.windows.net", "key")?;
/// client.delete_index("products").await?;
/// client.create_or_update_index("products", &IndexSchema::product()).await?;
/// ```
pub struct AzureSearchClient {
    http: Client,
    endpoint: Url,
    api_key: String,
    api_version: String,
}

impl AzureSearchClient {
    /// Create a new client for the given service endpoint using the default API version.
    ///
    /// # Arguments
    ///
    /// * `endpoint` - The service URL (e.g., "https://my-service.search.windows.net")
    /// * `api_key` - An admin key for the service
    ///
    /// # Returns
    ///
    /// * `Ok(AzureSearchClient)` - A new client instance
    /// * `Err(SearchIndexError)` - If the endpoint is not an http(s) URL or the
    ///   HTTP client cannot be built
    pub fn new(endpoint: &str, api_key: impl Into<String>) -> Result<Self, SearchIndexError> {
        Self::with_api_version(endpoint, api_key, DEFAULT_API_VERSION)
    }

    /// Create a new client pinned to a specific REST API version.
    pub fn with_api_version(
        endpoint: &str,
        api_key: impl Into<String>,
        api_version: impl Into<String>,
    ) -> Result<Self, SearchIndexError> {
        let endpoint = Self::parse_endpoint(endpoint)?;
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(SearchIndexError::validation("api key is required"));
        }

        let http = Client::builder()
            .build()
            .map_err(|e| SearchIndexError::connection(e.to_string()))?;

        let api_version = api_version.into();

        info!(
            endpoint = %endpoint,
            api_version = %api_version,
            "Created Azure AI Search client"
        );

        Ok(Self {
            http,
            endpoint,
            api_key,
            api_version,
        })
    }

    /// Parse the endpoint, normalizing it to end with a slash so relative
    /// paths are appended rather than replacing the last segment.
    fn parse_endpoint(endpoint: &str) -> Result<Url, SearchIndexError> {
        let trimmed = endpoint.trim();
        let normalized = if trimmed.ends_with('/') {
            trimmed.to_string()
        } else {
            format!("{}/", trimmed)
        };

        let url = Url::parse(&normalized)
            .map_err(|e| SearchIndexError::connection(format!("Invalid endpoint: {}", e)))?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            scheme => Err(SearchIndexError::connection(format!(
                "Invalid endpoint scheme: {}",
                scheme
            ))),
        }
    }

    /// Build the URL for an index resource, e.g. `indexes('products')/docs/search`.
    fn index_url(&self, index: &str, suffix: &str) -> Result<Url, SearchIndexError> {
        let mut url = self
            .endpoint
            .join(&format!("indexes('{}'){}", index, suffix))
            .map_err(|e| SearchIndexError::validation(format!("Invalid index name: {}", e)))?;

        url.query_pairs_mut()
            .append_pair("api-version", &self.api_version);

        Ok(url)
    }

    /// Start a request carrying the credential and a fresh correlation id.
    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        self.http
            .request(method, url)
            .header(API_KEY_HEADER, &self.api_key)
            .header(CLIENT_REQUEST_ID_HEADER, Uuid::new_v4().to_string())
            .header(CONTENT_TYPE, "application/json")
    }

    /// Read the service's error message from a failed response.
    ///
    /// Falls back to the raw body when it is not the `{"error": {...}}` shape.
    async fn error_message(response: Response) -> String {
        let body = response.text().await.unwrap_or_default();

        serde_json::from_str::<Value>(&body)
            .ok()
            .and_then(|v| {
                v.get("error")
                    .and_then(|e| e.get("message"))
                    .and_then(Value::as_str)
                    .map(String::from)
            })
            .unwrap_or(body)
    }

    /// Map an unsuccessful status to an error.
    ///
    /// Credential failures and server faults are classified the same way for
    /// every operation; other client errors use the operation's own variant.
    fn status_error(
        status: StatusCode,
        message: String,
        operation_error: impl FnOnce(String) -> SearchIndexError,
    ) -> SearchIndexError {
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                SearchIndexError::authorization(format!("status {}: {}", status, message))
            }
            s if s.is_server_error() => SearchIndexError::service(s.as_u16(), message),
            s => operation_error(format!("status {}: {}", s, message)),
        }
    }

    async fn read_json(response: Response) -> Result<Value, SearchIndexError> {
        response
            .json::<Value>()
            .await
            .map_err(|e| SearchIndexError::parse(e.to_string()))
    }
}

#[async_trait]
impl SearchIndexProvider for AzureSearchClient {
    /// Delete an index. A 404 from the service is reported as `NotFound`;
    /// every other failure is an error.
    #[instrument(skip(self), fields(index = %name))]
    async fn delete_index(&self, name: &str) -> Result<DeleteIndexOutcome, SearchIndexError> {
        let url = self.index_url(name, "")?;

        let response = self
            .request(Method::DELETE, url)
            .send()
            .await
            .map_err(|e| SearchIndexError::connection(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            debug!("Index does not exist");
            return Ok(DeleteIndexOutcome::NotFound);
        }

        if !status.is_success() {
            let message = Self::error_message(response).await;
            error!(status = %status, body = %message, "Delete index request failed");
            return Err(Self::status_error(status, message, SearchIndexError::index));
        }

        debug!("Index deleted");
        Ok(DeleteIndexOutcome::Deleted)
    }

    /// Create the index or overwrite its definition.
    #[instrument(skip(self, schema), fields(index = %name, fields = schema.fields.len()))]
    async fn create_or_update_index(
        &self,
        name: &str,
        schema: &IndexSchema,
    ) -> Result<(), SearchIndexError> {
        let url = self.index_url(name, "")?;
        let body = build_index_definition(name, schema);

        let response = self
            .request(Method::PUT, url)
            .json(&body)
            .send()
            .await
            .map_err(|e| SearchIndexError::connection(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = Self::error_message(response).await;
            error!(status = %status, body = %message, "Create index request failed");
            return Err(Self::status_error(status, message, SearchIndexError::index));
        }

        debug!(status = %status, "Index created or updated");
        Ok(())
    }

    /// Send all products in one indexing request.
    ///
    /// Both 200 (all accepted) and 207 (some rejected) carry per-item results,
    /// which are returned in the summary for the caller to inspect.
    #[instrument(skip(self, products), fields(index = %index, count = products.len()))]
    async fn merge_or_upload_documents(
        &self,
        index: &str,
        products: &[Product],
    ) -> Result<BatchOperationSummary, SearchIndexError> {
        let url = self.index_url(index, "/docs/index")?;
        let body = build_index_batch(products, IndexAction::MergeOrUpload);

        let response = self
            .request(Method::POST, url)
            .json(&body)
            .send()
            .await
            .map_err(|e| SearchIndexError::connection(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = Self::error_message(response).await;
            error!(status = %status, body = %message, "Indexing request failed");
            return Err(Self::status_error(
                status,
                message,
                SearchIndexError::bulk_operation,
            ));
        }

        let body = Self::read_json(response).await?;
        let summary = parse_index_response(&body)?;

        if summary.total != products.len() {
            error!(
                sent = products.len(),
                acknowledged = summary.total,
                "Indexing response does not cover the batch"
            );
            return Err(SearchIndexError::bulk_operation(format!(
                "service acknowledged {} of {} documents",
                summary.total,
                products.len()
            )));
        }

        debug!(
            status = %status,
            succeeded = summary.succeeded,
            failed = summary.failed,
            "Indexing request completed"
        );
        Ok(summary)
    }

    /// Run a full-text query and return the first page.
    #[instrument(skip(self, query), fields(index = %index, text = %query.text, top = query.top))]
    async fn search(
        &self,
        index: &str,
        query: &SearchQuery,
    ) -> Result<SearchResponse, SearchIndexError> {
        let url = self.index_url(index, "/docs/search")?;
        let body = build_search_body(query);

        let response = self
            .request(Method::POST, url)
            .json(&body)
            .send()
            .await
            .map_err(|e| SearchIndexError::connection(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = Self::error_message(response).await;
            error!(status = %status, body = %message, "Search request failed");
            return Err(Self::status_error(status, message, SearchIndexError::query));
        }

        let body = Self::read_json(response).await?;
        let results = parse_search_response(&body)?;

        debug!(
            hits = results.len(),
            total = ?results.total_count,
            "Search request completed"
        );
        Ok(results)
    }
}
