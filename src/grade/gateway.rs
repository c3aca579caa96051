/// Persistence gateway for grade records
///
/// Translates between `GradeRecord` and the store's document shape and keeps
/// store failures from escaping: `save` reports a bool, `load_all` an empty list.
/// Underlying causes go to the tracing log and nowhere else.

use crate::{
    grade::types::{GradeRecord, StoredGrade},
    store::{Document, DocumentStore, StoreError, StoredDocument},
};
use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{json, Value};

/// Collection grade documents are written to unless configured otherwise
pub const DEFAULT_COLLECTION: &str = "nilaimahasiswa";

const FIELD_STUDENT_ID: &str = "studentId";
const FIELD_STUDENT_NAME: &str = "studentName";
const FIELD_COURSE: &str = "course";
const FIELD_SCORE: &str = "score";
const FIELD_TIMESTAMP: &str = "timestamp";

/// Append/list access to the grade collection of a `DocumentStore`
#[derive(Debug, Clone)]
pub struct GradeGateway<S> {
    store: S,
    collection: String,
}

impl<S: DocumentStore> GradeGateway<S> {
    pub fn new(store: S, collection: impl Into<String>) -> Self {
        Self {
            store,
            collection: collection.into(),
        }
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// Append a record; `false` on any store failure
    pub async fn save(&self, record: &GradeRecord) -> bool {
        match self.store.append(&self.collection, to_document(record)).await {
            Ok(id) => {
                tracing::info!(
                    collection = %self.collection,
                    id = %id,
                    student_id = %record.student_id,
                    "💾 Grade record saved"
                );
                true
            }
            Err(e) => {
                tracing::error!(
                    collection = %self.collection,
                    error = %e,
                    "❌ Failed to save grade record"
                );
                false
            }
        }
    }

    /// Every stored record in store order; empty on failure
    pub async fn load_all(&self) -> Vec<StoredGrade> {
        self.try_load_all().await.unwrap_or_else(|e| {
            tracing::error!(
                collection = %self.collection,
                error = %e,
                "❌ Failed to load grade records"
            );
            Vec::new()
        })
    }

    /// Every stored record in store order, surfacing the store error
    ///
    /// Documents that do not convert to a `GradeRecord` are skipped with a warning.
    pub async fn try_load_all(&self) -> Result<Vec<StoredGrade>, StoreError> {
        let documents = self.store.list_all(&self.collection).await?;
        let total = documents.len();

        let grades: Vec<StoredGrade> = documents.into_iter().filter_map(from_document).collect();

        if grades.len() < total {
            tracing::warn!(
                collection = %self.collection,
                skipped = total - grades.len(),
                "⚠️ Skipped malformed grade documents"
            );
        }
        tracing::debug!(collection = %self.collection, count = grades.len(), "grade records loaded");

        Ok(grades)
    }
}

/// Store-native shape of a record
pub fn to_document(record: &GradeRecord) -> Document {
    let mut document = Document::new();
    document.insert(FIELD_STUDENT_ID.to_string(), json!(record.student_id));
    document.insert(FIELD_STUDENT_NAME.to_string(), json!(record.student_name));
    document.insert(FIELD_COURSE.to_string(), json!(record.course));
    document.insert(FIELD_SCORE.to_string(), json!(record.score));
    document.insert(
        FIELD_TIMESTAMP.to_string(),
        json!(record.created_at.to_rfc3339_opts(SecondsFormat::Nanos, true)),
    );
    document
}

/// Convert a stored document back into a record
///
/// Returns `None` when a required field is missing or has the wrong type.
/// A missing or unreadable timestamp falls back to the store's own time.
pub fn from_document(document: StoredDocument) -> Option<StoredGrade> {
    let Some(record) = record_from_fields(&document.fields, document.stored_at) else {
        tracing::debug!(id = %document.id, "grade document missing required fields");
        return None;
    };

    Some(StoredGrade {
        id: document.id,
        record,
    })
}

fn record_from_fields(fields: &Document, stored_at: DateTime<Utc>) -> Option<GradeRecord> {
    let text = |key: &str| fields.get(key).and_then(Value::as_str).map(str::to_string);

    let score = match fields.get(FIELD_SCORE)? {
        Value::Number(n) => n.as_f64(),
        // documents written by hand sometimes carry the score as text
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|s| s.is_finite())?;

    let created_at = fields
        .get(FIELD_TIMESTAMP)
        .and_then(Value::as_str)
        .and_then(|t| DateTime::parse_from_rfc3339(t).ok())
        .map(|t| t.with_timezone(&Utc))
        .unwrap_or(stored_at);

    Some(GradeRecord {
        student_name: text(FIELD_STUDENT_NAME)?,
        student_id: text(FIELD_STUDENT_ID)?,
        course: text(FIELD_COURSE)?,
        score,
        created_at,
    })
}
