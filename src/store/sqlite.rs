/// SQLite persistence layer for grade documents
///
/// All collections share one `documents` table. Bodies are stored as JSON text,
/// while the collection name is an indexed column so listing stays a single query.

use crate::store::document::{Document, DocumentId, DocumentStore, StoreError, StoredDocument};
use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePool},
    Row,
};
use std::path::Path;

/// SQLite-backed document store
#[derive(Debug, Clone)]
pub struct SqliteDocumentStore {
    /// Connection pool for the documents database
    pool: SqlitePool,
}

impl SqliteDocumentStore {
    /// Wrap an existing pool. Call `init_schema` before first use.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (or create) the database file at `db_path` and prepare the schema
    pub async fn open(db_path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let db_path = db_path.as_ref();
        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                StoreError::Unavailable(format!(
                    "failed to create data directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        tracing::info!("🗄️ Opening grade database: {}", db_path.display());

        let options = SqliteConnectOptions::new()
            .filename(db_path)
            .create_if_missing(true);
        let pool = SqlitePool::connect_with(options).await?;

        let store = Self::new(pool);
        store.init_schema().await?;
        Ok(store)
    }

    /// Create the documents table and its collection index
    ///
    /// Safe to call multiple times (uses IF NOT EXISTS).
    pub async fn init_schema(&self) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS documents (
                id TEXT PRIMARY KEY,
                collection TEXT NOT NULL,
                body JSON NOT NULL,
                stored_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_documents_collection
            ON documents(collection)
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

impl DocumentStore for SqliteDocumentStore {
    async fn append(&self, collection: &str, document: Document) -> Result<DocumentId, StoreError> {
        let id = DocumentId::generate();
        let body = serde_json::to_string(&Value::Object(document))?;
        let stored_at = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);

        sqlx::query("INSERT INTO documents (id, collection, body, stored_at) VALUES (?, ?, ?, ?)")
            .bind(id.as_str())
            .bind(collection)
            .bind(&body)
            .bind(&stored_at)
            .execute(&self.pool)
            .await?;

        tracing::debug!(collection, id = %id, "document appended");
        Ok(id)
    }

    async fn list_all(&self, collection: &str) -> Result<Vec<StoredDocument>, StoreError> {
        // rowid keeps insertion order
        let rows = sqlx::query(
            "SELECT id, body, stored_at FROM documents WHERE collection = ? ORDER BY rowid",
        )
        .bind(collection)
        .fetch_all(&self.pool)
        .await?;

        let mut documents = Vec::with_capacity(rows.len());
        for row in rows {
            let id: String = row.get("id");
            let body: String = row.get("body");
            let stored_at: String = row.get("stored_at");

            let fields = match serde_json::from_str::<Value>(&body)? {
                Value::Object(fields) => fields,
                _ => return Err(StoreError::NotAnObject { id }),
            };
            let stored_at = DateTime::parse_from_rfc3339(&stored_at)
                .map(|t| t.with_timezone(&Utc))
                .map_err(|_| StoreError::InvalidTimestamp {
                    id: id.clone(),
                    value: stored_at.clone(),
                })?;

            documents.push(StoredDocument {
                id: DocumentId::new(id),
                fields,
                stored_at,
            });
        }

        tracing::debug!(collection, count = documents.len(), "documents listed");
        Ok(documents)
    }
}
