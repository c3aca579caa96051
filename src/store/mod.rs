/// Document Store Layer
///
/// The external database the grade form talks to, reduced to an
/// append-and-list contract:
/// - `DocumentStore` trait and document types
/// - SQLite backend with sqlx
/// - In-memory backend for tests and throwaway runs

// Trait, document types and store errors
pub mod document;

// SQLite persistence with sqlx
pub mod sqlite;

// Process-local backend
pub mod memory;

pub use document::{Document, DocumentId, DocumentStore, StoreError, StoredDocument};
pub use memory::MemoryDocumentStore;
pub use sqlite::SqliteDocumentStore;

/// Store selected by configuration at startup
#[derive(Debug, Clone)]
pub enum StoreBackend {
    Sqlite(SqliteDocumentStore),
    Memory(MemoryDocumentStore),
}

impl DocumentStore for StoreBackend {
    async fn append(&self, collection: &str, document: Document) -> Result<DocumentId, StoreError> {
        match self {
            StoreBackend::Sqlite(store) => store.append(collection, document).await,
            StoreBackend::Memory(store) => store.append(collection, document).await,
        }
    }

    async fn list_all(&self, collection: &str) -> Result<Vec<StoredDocument>, StoreError> {
        match self {
            StoreBackend::Sqlite(store) => store.list_all(collection).await,
            StoreBackend::Memory(store) => store.list_all(collection).await,
        }
    }
}
