/// Grade input validation
///
/// Pure checks run in a fixed order, stopping at the first failure:
/// 1. every field present (score must parse as a number)
/// 2. student id is all digits, 8 or more
/// 3. score within [0, 100]

use crate::grade::types::{GradeRecord, RawGradeFields};
use chrono::Utc;
use once_cell::sync::Lazy;
use regex::Regex;

// ASCII digits only; `\d` in the regex crate would also accept other scripts.
static STUDENT_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{8,}$").expect("valid student id regex"));

pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 100.0;

/// Why a submission was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("all fields required")]
    MissingFields,
    #[error("invalid student id format")]
    InvalidStudentId,
    #[error("score out of range")]
    ScoreOutOfRange,
}

impl Rejection {
    /// Short machine-readable reason
    pub fn reason(&self) -> &'static str {
        match self {
            Rejection::MissingFields => "all fields required",
            Rejection::InvalidStudentId => "invalid student id format",
            Rejection::ScoreOutOfRange => "score out of range",
        }
    }

    /// Message shown to the user in the danger notification
    pub fn message(&self) -> &'static str {
        match self {
            Rejection::MissingFields => "All fields must be filled in correctly!",
            Rejection::InvalidStudentId => "Student ID must be numeric with at least 8 digits!",
            Rejection::ScoreOutOfRange => "Score must be between 0 and 100!",
        }
    }
}

/// Validate raw form input into a `GradeRecord` stamped with the current time
pub fn validate(raw: &RawGradeFields) -> Result<GradeRecord, Rejection> {
    let student_name = non_empty(raw.student_name.as_deref().map(str::trim));
    let student_id = non_empty(raw.student_id.as_deref().map(str::trim));
    let course = non_empty(raw.course.as_deref());
    let score = raw.score.as_deref().and_then(parse_score);

    let (Some(student_name), Some(student_id), Some(course), Some(score)) =
        (student_name, student_id, course, score)
    else {
        return Err(Rejection::MissingFields);
    };

    if !is_valid_student_id(student_id) {
        return Err(Rejection::InvalidStudentId);
    }

    if !score.is_finite() || !(MIN_SCORE..=MAX_SCORE).contains(&score) {
        return Err(Rejection::ScoreOutOfRange);
    }

    Ok(GradeRecord {
        student_name: student_name.to_string(),
        student_id: student_id.to_string(),
        course: course.to_string(),
        score,
        created_at: Utc::now(),
    })
}

/// `true` when `id` is all ASCII digits and at least 8 long
pub fn is_valid_student_id(id: &str) -> bool {
    STUDENT_ID_RE.is_match(id)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn parse_score(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|score| !score.is_nan())
}
