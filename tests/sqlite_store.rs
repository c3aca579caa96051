use gradeform::{
    grade::{GradeGateway, GradeRecord, DEFAULT_COLLECTION},
    store::{Document, DocumentStore, SqliteDocumentStore},
};
use chrono::{TimeZone, Utc};
use serde_json::json;
use tempfile::TempDir;

fn document(name: &str) -> Document {
    let mut document = Document::new();
    document.insert("studentName".to_string(), json!(name));
    document
}

fn record(student_id: &str, score: f64) -> GradeRecord {
    GradeRecord {
        student_name: "Jane Doe".to_string(),
        student_id: student_id.to_string(),
        course: "CS101 - Data Structures".to_string(),
        score,
        created_at: Utc.with_ymd_and_hms(2024, 9, 2, 10, 0, 0).unwrap(),
    }
}

#[tokio::test]
async fn open_creates_missing_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("grades.db");

    let store = SqliteDocumentStore::open(&path).await.unwrap();

    assert!(path.exists());
    assert!(store.list_all(DEFAULT_COLLECTION).await.unwrap().is_empty());
}

#[tokio::test]
async fn list_returns_documents_in_insertion_order() {
    let dir = TempDir::new().unwrap();
    let store = SqliteDocumentStore::open(dir.path().join("grades.db")).await.unwrap();

    let first = store.append("grades", document("a")).await.unwrap();
    let second = store.append("grades", document("b")).await.unwrap();

    let listed = store.list_all("grades").await.unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, first);
    assert_eq!(listed[1].id, second);
    assert_eq!(listed[0].fields["studentName"], "a");
    assert!(listed[0].stored_at <= listed[1].stored_at);
}

#[tokio::test]
async fn collections_do_not_leak_into_each_other() {
    let dir = TempDir::new().unwrap();
    let store = SqliteDocumentStore::open(dir.path().join("grades.db")).await.unwrap();

    store.append("grades", document("a")).await.unwrap();
    store.append("archive", document("b")).await.unwrap();

    assert_eq!(store.list_all("grades").await.unwrap().len(), 1);
    assert_eq!(store.list_all("archive").await.unwrap().len(), 1);
    assert!(store.list_all("missing").await.unwrap().is_empty());
}

#[tokio::test]
async fn documents_survive_reopening() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("grades.db");

    {
        let store = SqliteDocumentStore::open(&path).await.unwrap();
        store.append("grades", document("kept")).await.unwrap();
    }

    let reopened = SqliteDocumentStore::open(&path).await.unwrap();
    let listed = reopened.list_all("grades").await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].fields["studentName"], "kept");
}

#[tokio::test]
async fn gateway_round_trips_records_through_sqlite() {
    let dir = TempDir::new().unwrap();
    let store = SqliteDocumentStore::open(dir.path().join("grades.db")).await.unwrap();
    let gateway = GradeGateway::new(store, DEFAULT_COLLECTION);

    assert!(gateway.save(&record("20231234", 88.0)).await);
    assert!(gateway.save(&record("20231235", 59.5)).await);

    let loaded = gateway.load_all().await;
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[0].record, record("20231234", 88.0));
    assert_eq!(loaded[1].record.score, 59.5);
    assert_ne!(loaded[0].id, loaded[1].id);
}
