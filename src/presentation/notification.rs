/// Typed, dismissible notifications
///
/// A page carries at most one notification; rendering a new one replaces
/// whatever the alert container held. The alert dismisses itself after
/// `AUTO_DISMISS`, fading out for `FADE_OUT` before it is removed.

use crate::presentation::templates;
use minijinja::context;
use serde::Serialize;
use std::time::Duration;

/// Time an alert stays fully visible
pub const AUTO_DISMISS: Duration = Duration::from_secs(5);

/// Fade-out grace period before the alert is removed
pub const FADE_OUT: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Danger,
    Warning,
    Info,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Danger => "danger",
            NotificationKind::Warning => "warning",
            NotificationKind::Info => "info",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            NotificationKind::Success => "bi-check-circle-fill",
            NotificationKind::Danger => "bi-exclamation-circle-fill",
            NotificationKind::Warning => "bi-exclamation-triangle-fill",
            NotificationKind::Info => "bi-info-circle-fill",
        }
    }

    fn title(&self) -> &'static str {
        match self {
            NotificationKind::Success => "Success!",
            NotificationKind::Danger => "Error!",
            NotificationKind::Warning => "Warning!",
            NotificationKind::Info => "Info:",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Success, message)
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Danger, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Warning, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Info, message)
    }

    /// Alert markup for the `#alertContainer` element
    pub fn render(&self) -> Result<String, minijinja::Error> {
        templates::render("alert.html", &context! { notification => self.view() })
    }

    /// Template data for `alert.html`
    pub(crate) fn view(&self) -> AlertView<'_> {
        AlertView {
            kind: self.kind.as_str(),
            title: self.kind.title(),
            icon: self.kind.icon(),
            message: &self.message,
            dismiss_after_ms: AUTO_DISMISS.as_millis() as u64,
            fade_ms: FADE_OUT.as_millis() as u64,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct AlertView<'a> {
    kind: &'static str,
    title: &'static str,
    icon: &'static str,
    message: &'a str,
    dismiss_after_ms: u64,
    fade_ms: u64,
}
