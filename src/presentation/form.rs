/// Grade input form controller
///
/// Wires a submit to the validator and the gateway and decides what the user
/// sees next: which notification, and whether the form keeps its values.

use crate::{
    grade::{validate, GradeGateway, RawGradeFields, Rejection},
    presentation::notification::Notification,
    store::DocumentStore,
};
use serde::Serialize;
use std::sync::Arc;

pub const SAVED_MESSAGE: &str = "Grade saved successfully!";
pub const SAVE_FAILED_MESSAGE: &str = "Failed to save data. Please try again.";

/// Values shown in the form inputs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormValues {
    pub student_name: String,
    pub student_id: String,
    pub course: String,
    pub score: String,
}

impl From<&RawGradeFields> for FormValues {
    fn from(raw: &RawGradeFields) -> Self {
        Self {
            student_name: raw.student_name.clone().unwrap_or_default(),
            student_id: raw.student_id.clone().unwrap_or_default(),
            course: raw.course.clone().unwrap_or_default(),
            score: raw.score.clone().unwrap_or_default(),
        }
    }
}

/// What happened to a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitStatus {
    Rejected(Rejection),
    Saved,
    SaveFailed,
}

/// Result of a submit: status, the notification to show and the form to redraw
#[derive(Debug, Clone, PartialEq)]
pub struct FormOutcome {
    pub status: SubmitStatus,
    pub notification: Notification,
    pub form: FormValues,
}

/// Handles form submissions against one gateway
#[derive(Debug)]
pub struct FormController<S> {
    gateway: Arc<GradeGateway<S>>,
}

impl<S: DocumentStore> FormController<S> {
    pub fn new(gateway: Arc<GradeGateway<S>>) -> Self {
        Self { gateway }
    }

    /// Validate, then save on success
    ///
    /// A rejected submission never reaches the store; an accepted one is written
    /// exactly once. The form is cleared only after a successful save.
    pub async fn submit(&self, raw: RawGradeFields) -> FormOutcome {
        let record = match validate(&raw) {
            Ok(record) => record,
            Err(rejection) => {
                tracing::debug!(reason = rejection.reason(), "grade submission rejected");
                return FormOutcome {
                    status: SubmitStatus::Rejected(rejection),
                    notification: Notification::danger(rejection.message()),
                    form: FormValues::from(&raw),
                };
            }
        };

        if self.gateway.save(&record).await {
            FormOutcome {
                status: SubmitStatus::Saved,
                notification: Notification::success(SAVED_MESSAGE),
                form: FormValues::default(),
            }
        } else {
            FormOutcome {
                status: SubmitStatus::SaveFailed,
                notification: Notification::danger(SAVE_FAILED_MESSAGE),
                form: FormValues::from(&raw),
            }
        }
    }
}
