/// Document store abstraction
///
/// The grade form needs exactly two things from a database: append a JSON document
/// to a named collection, and list every document of a collection back. Anything
/// that can do that implements `DocumentStore`.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};
use std::{fmt, future::Future};

/// A store-native document: a flat JSON object
pub type Document = Map<String, Value>;

/// Opaque identifier assigned by the store on append
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Fresh random identifier (UUID v4)
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A document as returned by `list_all`
#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument {
    pub id: DocumentId,
    pub fields: Document,
    /// Time the store accepted the document
    pub stored_at: DateTime<Utc>,
}

/// Failures raised by a store backend
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("document encoding error: {0}")]
    Encoding(#[from] serde_json::Error),

    #[error("stored document {id} is not a JSON object")]
    NotAnObject { id: String },

    #[error("stored document {id} has invalid stored_at value {value:?}")]
    InvalidTimestamp { id: String, value: String },

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Append-and-list document store
///
/// Both operations are single attempts. Implementations must not retry; callers
/// decide what a failure means.
pub trait DocumentStore: Send + Sync {
    /// Append a document to `collection`, returning the identifier the store assigned
    fn append(
        &self,
        collection: &str,
        document: Document,
    ) -> impl Future<Output = Result<DocumentId, StoreError>> + Send;

    /// List every document in `collection`, in store-defined order
    fn list_all(
        &self,
        collection: &str,
    ) -> impl Future<Output = Result<Vec<StoredDocument>, StoreError>> + Send;
}
