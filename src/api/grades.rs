/// Grade JSON endpoints
///
/// Same operations as the pages, for scripted clients. Store failures still
/// never surface as a raw error: the body always says what happened.

use crate::{
    api::AppState,
    grade::{RawGradeFields, Rejection, StoredGrade, COURSE_CATALOG},
    presentation::{listing::sort_for_display, Notification, SubmitStatus},
};
use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Request body for a grade submission
///
/// Accepts camelCase or snake_case keys; the score may be a number or a string.
#[derive(Debug, Default, Deserialize)]
pub struct SubmitGradeRequest {
    #[serde(default, alias = "studentName")]
    pub student_name: Option<String>,
    #[serde(default, alias = "studentId")]
    pub student_id: Option<String>,
    #[serde(default)]
    pub course: Option<String>,
    #[serde(default)]
    pub score: Option<Value>,
}

impl From<SubmitGradeRequest> for RawGradeFields {
    fn from(request: SubmitGradeRequest) -> Self {
        let score = match request.score {
            Some(Value::Number(n)) => Some(n.to_string()),
            Some(Value::String(s)) => Some(s),
            _ => None,
        };
        Self {
            student_name: request.student_name,
            student_id: request.student_id,
            course: request.course,
            score,
        }
    }
}

/// Response for a grade submission
#[derive(Debug, Serialize)]
pub struct SubmitGradeResponse {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<&'static str>,
    pub notification: Notification,
}

/// Response for the record listing
#[derive(Debug, Serialize)]
pub struct GradeListResponse {
    pub records: Vec<StoredGrade>,
    pub total: usize,
}

/// Create grade API routes
pub fn create_grade_routes() -> Router<AppState> {
    Router::new()
        .route("/api/grades", get(list_grades).post(submit_grade))
        .route("/api/courses", get(list_courses))
}

/// List every stored record, oldest first
///
/// GET /api/grades
/// Returns: { "records": [{ "id": "...", "studentName": "...", ... }], "total": n }
pub async fn list_grades(State(state): State<AppState>) -> Json<GradeListResponse> {
    let mut records = state.gateway.load_all().await;
    sort_for_display(&mut records);
    Json(GradeListResponse {
        total: records.len(),
        records,
    })
}

/// Validate and save one record
///
/// POST /api/grades
/// Body: { "studentName": "...", "studentId": "...", "course": "...", "score": 88 }
/// 201 when saved, 422 when rejected, 503 when the store failed
///
/// The body is parsed here rather than by the `Json` extractor so a malformed
/// or mistyped body still gets the usual response shape: 422 with the
/// missing-fields rejection, and nothing written.
pub async fn submit_grade(
    State(state): State<AppState>,
    body: String,
) -> (StatusCode, Json<SubmitGradeResponse>) {
    let request: SubmitGradeRequest = match serde_json::from_str(&body) {
        Ok(request) => request,
        Err(e) => {
            tracing::warn!(error = %e, "❌ Unreadable grade submission body");
            let rejection = Rejection::MissingFields;
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(SubmitGradeResponse {
                    ok: false,
                    reason: Some(rejection.reason()),
                    notification: Notification::danger(rejection.message()),
                }),
            );
        }
    };

    let outcome = state.form.submit(request.into()).await;

    let (status, ok, reason) = match outcome.status {
        SubmitStatus::Saved => (StatusCode::CREATED, true, None),
        SubmitStatus::Rejected(rejection) => {
            (StatusCode::UNPROCESSABLE_ENTITY, false, Some(rejection.reason()))
        }
        SubmitStatus::SaveFailed => (StatusCode::SERVICE_UNAVAILABLE, false, None),
    };

    (
        status,
        Json(SubmitGradeResponse {
            ok,
            reason,
            notification: outcome.notification,
        }),
    )
}

/// Fixed course catalog
///
/// GET /api/courses
/// Returns: { "courses": ["CS101 - Data Structures", ...] }
pub async fn list_courses() -> Json<Value> {
    Json(json!({ "courses": COURSE_CATALOG }))
}
