//! End-to-end runs of the orchestrator against an in-memory search service.

mod common;

use std::io::Write;
use std::path::Path;

use tempfile::{NamedTempFile, TempDir};

use common::{InMemoryService, Output};
use product_search::{AppConfig, AppError, Orchestrator, Reporter, RunOutcome};
use product_search_repository::{DeleteIndexOutcome, SearchIndexClient, SearchIndexError};
use product_search_shared::{IndexSchema, Product};

const INDEX: &str = "products";

fn write_input(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn orchestrator(service: &InMemoryService, input: &Path) -> (Orchestrator, Output) {
    colored::control::set_override(false);
    let output = Output::default();
    let config = AppConfig::new("https://svc.search.windows.net", "key", INDEX, input);
    let client = SearchIndexClient::new(Box::new(service.clone()));
    let reporter = Reporter::new(Box::new(output.clone()));
    (Orchestrator::new(client, config, reporter), output)
}

#[tokio::test]
async fn test_single_product_is_found_by_description_term() {
    let service = InMemoryService::new();
    let input = write_input(
        r#"[{"id":"1","name":"Vitamin C Serum","description":"Brightening formulation"}]"#,
    );
    let (mut orchestrator, output) = orchestrator(&service, input.path());

    let outcome = orchestrator.run().await.unwrap();

    let summary = match outcome {
        RunOutcome::Completed(summary) => summary,
        other => panic!("unexpected outcome: {:?}", other),
    };
    assert_eq!(summary.delete_outcome, DeleteIndexOutcome::NotFound);
    assert_eq!(summary.uploaded, 1);
    assert_eq!(summary.response.total_count, Some(1));
    assert_eq!(summary.response.hits.len(), 1);
    assert_eq!(summary.response.hits[0].product.name, "Vitamin C Serum");
    assert!(summary.response.hits[0].score >= 0.0);

    assert_eq!(
        service.calls().await,
        vec![
            "delete:products",
            "create:products",
            "upload:products",
            "search:products"
        ]
    );

    let printed = output.contents();
    assert!(printed.contains("Index does not exist"));
    assert!(printed.contains("Created index: products"));
    assert!(printed.contains("1 products uploaded successfully."));
    assert!(printed.contains("Found 1 matching products:"));
    assert!(printed.contains("Vitamin C Serum"));
    assert!(printed.contains("Score: "));
}

#[tokio::test]
async fn test_empty_array_skips_upload_and_query() {
    let service = InMemoryService::new();
    let input = write_input("[]");
    let (mut orchestrator, output) = orchestrator(&service, input.path());

    let outcome = orchestrator.run().await.unwrap();

    assert_eq!(outcome, RunOutcome::NoProducts);
    assert_eq!(
        service.calls().await,
        vec!["delete:products", "create:products"]
    );
    assert!(output.contents().contains("No products found in JSON"));
}

#[tokio::test]
async fn test_missing_file_skips_upload_and_query() {
    let service = InMemoryService::new();
    let dir = TempDir::new().unwrap();
    let (mut orchestrator, output) = orchestrator(&service, &dir.path().join("products.json"));

    let outcome = orchestrator.run().await.unwrap();

    assert_eq!(outcome, RunOutcome::InputFileMissing);
    let calls = service.calls().await;
    assert!(!calls.iter().any(|c| c.starts_with("upload")));
    assert!(!calls.iter().any(|c| c.starts_with("search")));
    assert!(output.contents().contains("JSON file not found"));
}

#[tokio::test]
async fn test_existing_index_is_replaced() {
    let service = InMemoryService::new()
        .with_index(INDEX, vec![Product::new("old", "Old Product", "Stale formulation")])
        .await;
    let input = write_input(
        r#"[{"id":"1","name":"Vitamin C Serum","description":"Brightening formulation"}]"#,
    );
    let (mut orchestrator, output) = orchestrator(&service, input.path());

    let outcome = orchestrator.run().await.unwrap();

    let summary = match outcome {
        RunOutcome::Completed(summary) => summary,
        other => panic!("unexpected outcome: {:?}", other),
    };
    assert_eq!(summary.delete_outcome, DeleteIndexOutcome::Deleted);
    assert_eq!(summary.response.hits.len(), 1);
    assert_eq!(summary.response.hits[0].product.id, "1");

    let index = service.index(INDEX).await.unwrap();
    assert_eq!(index.schema, IndexSchema::product());
    assert!(!index.documents.contains_key("old"));
    assert!(output.contents().contains("Deleted index: products"));
}

#[tokio::test]
async fn test_duplicate_ids_keep_last_description() {
    let service = InMemoryService::new();
    let input = write_input(
        r#"[
            {"id":"1","name":"Vitamin C Serum","description":"Original formulation"},
            {"id":"1","name":"Vitamin C Serum","description":"Improved formulation"}
        ]"#,
    );
    let (mut orchestrator, _output) = orchestrator(&service, input.path());

    orchestrator.run().await.unwrap();

    let index = service.index(INDEX).await.unwrap();
    assert_eq!(index.documents.len(), 1);
    assert_eq!(index.documents["1"].description, "Improved formulation");
}

#[tokio::test]
async fn test_results_are_limited_and_ordered() {
    let service = InMemoryService::new();
    let products: Vec<String> = (0..8)
        .map(|i| {
            // Product i mentions the term i+1 times
            let description = vec!["formulation"; i + 1].join(" ");
            format!(
                r#"{{"id":"{}","name":"Product {}","description":"{}"}}"#,
                i, i, description
            )
        })
        .collect();
    let input = write_input(&format!("[{}]", products.join(",")));
    let (mut orchestrator, _output) = orchestrator(&service, input.path());

    let outcome = orchestrator.run().await.unwrap();

    let summary = match outcome {
        RunOutcome::Completed(summary) => summary,
        other => panic!("unexpected outcome: {:?}", other),
    };
    assert_eq!(summary.uploaded, 8);
    assert_eq!(summary.response.total_count, Some(8));
    assert_eq!(summary.response.hits.len(), 5);
    assert_eq!(summary.response.hits[0].product.id, "7");
    assert!(summary
        .response
        .hits
        .windows(2)
        .all(|pair| pair[0].score >= pair[1].score));
}

#[tokio::test]
async fn test_malformed_input_aborts_before_upload() {
    let service = InMemoryService::new();
    let input = write_input(r#"[{"id":"1","name":"#);
    let (mut orchestrator, _output) = orchestrator(&service, input.path());

    let result = orchestrator.run().await;

    assert!(matches!(result, Err(AppError::ParseError(_))));
    assert_eq!(
        service.calls().await,
        vec!["delete:products", "create:products"]
    );
}

#[tokio::test]
async fn test_invalid_index_name_aborts_run() {
    let service = InMemoryService::new();
    let input = write_input("[]");
    colored::control::set_override(false);
    let config = AppConfig::new("https://svc.search.windows.net", "key", "Bad_Name", input.path());
    let client = SearchIndexClient::new(Box::new(service.clone()));
    let mut orchestrator = Orchestrator::new(client, config, Reporter::new(Box::new(Output::default())));

    let result = orchestrator.run().await;

    assert!(matches!(
        result,
        Err(AppError::SearchError(SearchIndexError::ValidationError(_)))
    ));
    assert!(service.calls().await.is_empty());
}
