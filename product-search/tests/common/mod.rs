//! In-memory search service used by the pipeline tests.

use std::collections::{BTreeMap, HashMap};
use std::io::{self, Write};
use std::sync::{Arc, Mutex as StdMutex};

use async_trait::async_trait;
use tokio::sync::Mutex;

use product_search_repository::{
    BatchOperationResult, BatchOperationSummary, DeleteIndexOutcome, SearchIndexError,
    SearchIndexProvider,
};
use product_search_shared::{IndexSchema, Product, SearchHit, SearchQuery, SearchResponse};

/// One index: its schema and documents keyed by id.
#[derive(Debug, Clone)]
pub struct StoredIndex {
    pub schema: IndexSchema,
    pub documents: BTreeMap<String, Product>,
}

#[derive(Debug, Default)]
pub struct ServiceState {
    pub indexes: HashMap<String, StoredIndex>,
    /// Operation log, e.g. `delete:products`.
    pub calls: Vec<String>,
}

/// Models merge-or-upload writes and term-frequency scoring over searchable fields.
#[derive(Clone, Default)]
pub struct InMemoryService {
    pub state: Arc<Mutex<ServiceState>>,
}

impl InMemoryService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an index that already holds documents.
    pub async fn with_index(self, name: &str, documents: Vec<Product>) -> Self {
        let stored = StoredIndex {
            schema: IndexSchema::product(),
            documents: documents.into_iter().map(|p| (p.id.clone(), p)).collect(),
        };
        self.state
            .lock()
            .await
            .indexes
            .insert(name.to_string(), stored);
        self
    }

    pub async fn calls(&self) -> Vec<String> {
        self.state.lock().await.calls.clone()
    }

    pub async fn index(&self, name: &str) -> Option<StoredIndex> {
        self.state.lock().await.indexes.get(name).cloned()
    }
}

fn score(product: &Product, schema: &IndexSchema, terms: &[String]) -> f64 {
    let fields = schema.searchable_fields();
    let mut matches = 0usize;

    for field in fields {
        let text = match field {
            "name" => &product.name,
            "description" => &product.description,
            _ => continue,
        };
        let tokens: Vec<String> = text
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
            .map(str::to_lowercase)
            .collect();
        matches += terms
            .iter()
            .map(|term| tokens.iter().filter(|t| *t == term).count())
            .sum::<usize>();
    }

    matches as f64
}

#[async_trait]
impl SearchIndexProvider for InMemoryService {
    async fn delete_index(&self, name: &str) -> Result<DeleteIndexOutcome, SearchIndexError> {
        let mut state = self.state.lock().await;
        state.calls.push(format!("delete:{}", name));

        match state.indexes.remove(name) {
            Some(_) => Ok(DeleteIndexOutcome::Deleted),
            None => Ok(DeleteIndexOutcome::NotFound),
        }
    }

    async fn create_or_update_index(
        &self,
        name: &str,
        schema: &IndexSchema,
    ) -> Result<(), SearchIndexError> {
        let mut state = self.state.lock().await;
        state.calls.push(format!("create:{}", name));

        let documents = state
            .indexes
            .remove(name)
            .map(|existing| existing.documents)
            .unwrap_or_default();
        state.indexes.insert(
            name.to_string(),
            StoredIndex {
                schema: schema.clone(),
                documents,
            },
        );
        Ok(())
    }

    async fn merge_or_upload_documents(
        &self,
        name: &str,
        products: &[Product],
    ) -> Result<BatchOperationSummary, SearchIndexError> {
        let mut state = self.state.lock().await;
        state.calls.push(format!("upload:{}", name));

        let index = state
            .indexes
            .get_mut(name)
            .ok_or_else(|| SearchIndexError::service(404, format!("index {} not found", name)))?;

        let results = products
            .iter()
            .map(|product| {
                let existed = index.documents.contains_key(&product.id);
                // Every field is present on a product, so a merge overwrites all of them.
                index.documents.insert(product.id.clone(), product.clone());
                BatchOperationResult {
                    key: product.id.clone(),
                    success: true,
                    status_code: if existed { 200 } else { 201 },
                    error: None,
                }
            })
            .collect();

        Ok(BatchOperationSummary::from_results(results))
    }

    async fn search(
        &self,
        name: &str,
        query: &SearchQuery,
    ) -> Result<SearchResponse, SearchIndexError> {
        let mut state = self.state.lock().await;
        state.calls.push(format!("search:{}", name));

        let index = state
            .indexes
            .get(name)
            .ok_or_else(|| SearchIndexError::service(404, format!("index {} not found", name)))?;

        let terms: Vec<String> = query
            .text
            .split_whitespace()
            .map(str::to_lowercase)
            .collect();

        let mut hits: Vec<SearchHit> = index
            .documents
            .values()
            .map(|product| SearchHit {
                score: score(product, &index.schema, &terms),
                product: product.clone(),
            })
            .filter(|hit| hit.score > 0.0)
            .collect();
        hits.sort_by(|a, b| b.score.total_cmp(&a.score));

        let total_count = query.include_total_count.then_some(hits.len() as u64);
        hits.truncate(query.top);

        Ok(SearchResponse { total_count, hits })
    }
}

/// Shared in-memory sink for reporter output.
#[derive(Clone, Default)]
pub struct Output(Arc<StdMutex<Vec<u8>>>);

impl Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Output {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}
