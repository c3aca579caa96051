/// Grade record type definitions
///
/// `GradeRecord` is the only entity the system stores. `RawGradeFields` is what
/// arrives from the form before validation, one optional string per input.

use crate::store::DocumentId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Courses offered in the form's course selector
///
/// Every entry follows the `"<code> - <name>"` format the listing table splits on.
pub const COURSE_CATALOG: &[&str] = &[
    "CS101 - Data Structures",
    "CS102 - Algorithms",
    "CS201 - Database Systems",
    "CS202 - Operating Systems",
    "CS203 - Computer Networks",
    "CS301 - Software Engineering",
    "CS302 - Web Programming",
    "MA101 - Discrete Mathematics",
    "MA201 - Linear Algebra",
];

/// A validated grade entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeRecord {
    /// Full student name, trimmed, never empty
    pub student_name: String,
    /// All-digit student id, at least 8 characters
    pub student_id: String,
    /// Course in `"<code> - <name>"` form
    pub course: String,
    /// Score in [0, 100]
    pub score: f64,
    pub created_at: DateTime<Utc>,
}

/// A record read back from the store, with its store-assigned id
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoredGrade {
    pub id: DocumentId,
    #[serde(flatten)]
    pub record: GradeRecord,
}

/// Unvalidated form input
///
/// A field that was not sent at all and a field sent empty are treated alike
/// by the validator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawGradeFields {
    #[serde(default)]
    pub student_name: Option<String>,
    #[serde(default)]
    pub student_id: Option<String>,
    #[serde(default)]
    pub course: Option<String>,
    #[serde(default)]
    pub score: Option<String>,
}

impl RawGradeFields {
    /// Convenience constructor with every field present
    pub fn new(
        student_name: impl Into<String>,
        student_id: impl Into<String>,
        course: impl Into<String>,
        score: impl Into<String>,
    ) -> Self {
        Self {
            student_name: Some(student_name.into()),
            student_id: Some(student_id.into()),
            course: Some(course.into()),
            score: Some(score.into()),
        }
    }
}
