//! Request and response types for search index operations.

use serde::{Deserialize, Serialize};

/// Outcome of a successful index deletion request.
///
/// Together with `Result<_, SearchIndexError>` this distinguishes an index that
/// was deleted, one that did not exist, and a failed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteIndexOutcome {
    /// The index existed and was deleted.
    Deleted,
    /// The service reported that no index with that name exists.
    NotFound,
}

/// Write semantics attached to each document in an indexing batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IndexAction {
    /// Insert the document, replacing any existing one with the same key.
    Upload,
    /// Merge fields into an existing document. Fails if the key is absent.
    Merge,
    /// Merge into an existing document, or insert it if the key is absent.
    MergeOrUpload,
    /// Remove the document with this key.
    Delete,
}

impl IndexAction {
    /// The service's action name.
    pub fn as_str(&self) -> &'static str {
        match self {
            IndexAction::Upload => "upload",
            IndexAction::Merge => "merge",
            IndexAction::MergeOrUpload => "mergeOrUpload",
            IndexAction::Delete => "delete",
        }
    }
}

/// Result of a batch operation for a single document.
///
/// This struct represents the outcome of one document within an indexing batch.
/// It indicates whether the service accepted it and includes error details if not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOperationResult {
    /// The document key.
    pub key: String,
    /// Whether the operation succeeded.
    pub success: bool,
    /// Per-item status code reported by the service.
    pub status_code: u16,
    /// Error message if the operation failed.
    pub error: Option<String>,
}

/// Summary of a batch operation containing aggregate statistics and individual results.
///
/// This struct provides a complete overview of a bulk operation, including the total
/// number of items processed, how many succeeded and failed, and detailed results for
/// each individual item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchOperationSummary {
    /// Total number of items in the batch.
    pub total: usize,
    /// Number of successful operations.
    pub succeeded: usize,
    /// Number of failed operations.
    pub failed: usize,
    /// Individual results for each item.
    pub results: Vec<BatchOperationResult>,
}

impl BatchOperationSummary {
    /// Build a summary from individual results.
    pub fn from_results(results: Vec<BatchOperationResult>) -> Self {
        let succeeded = results.iter().filter(|r| r.success).count();
        Self {
            total: results.len(),
            succeeded,
            failed: results.len() - succeeded,
            results,
        }
    }

    /// Whether every item in the batch was accepted.
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    /// Keys of the items the service rejected.
    pub fn failed_keys(&self) -> Vec<&str> {
        self.results
            .iter()
            .filter(|r| !r.success)
            .map(|r| r.key.as_str())
            .collect()
    }
}
