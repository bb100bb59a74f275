use async_trait::async_trait;
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("document store is not configured")]
    NotConfigured,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("invalid document: {0}")]
    InvalidDocument(String),

    #[error("failed to encode document: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Durable storage for schemaless documents grouped into named collections.
///
/// Implementations make a single write attempt per call and never retry. A
/// document is either written in full and assigned an identifier, or not
/// written at all.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert one document and return its generated identifier.
    async fn insert_document(
        &self,
        collection: &str,
        document: Map<String, Value>,
    ) -> Result<String, StorageError>;

    /// Whether the backing store answers right now.
    async fn ping(&self) -> bool;
}

/// Serialize `record` and insert it into `collection`.
pub async fn create_document<T>(
    store: &dyn DocumentStore,
    collection: &str,
    record: &T,
) -> Result<String, StorageError>
where
    T: Serialize + ?Sized,
{
    if collection.trim().is_empty() {
        return Err(StorageError::InvalidDocument(
            "collection name must not be empty".to_string(),
        ));
    }

    match serde_json::to_value(record)? {
        Value::Object(document) => store.insert_document(collection, document).await,
        other => Err(StorageError::InvalidDocument(format!(
            "expected a JSON object, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Stand-in used when no database is configured. Every write fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableDocumentStore;

#[async_trait]
impl DocumentStore for UnavailableDocumentStore {
    async fn insert_document(
        &self,
        _collection: &str,
        _document: Map<String, Value>,
    ) -> Result<String, StorageError> {
        Err(StorageError::NotConfigured)
    }

    async fn ping(&self) -> bool {
        false
    }
}
