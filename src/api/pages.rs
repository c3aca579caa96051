/// Server-rendered pages
///
/// The input form posts back to itself; the listing page reloads from the store
/// on a plain visit and navigates the cached records when a page link is
/// followed. A template failure is logged and answered with a bare 500.

use crate::{
    api::AppState,
    grade::RawGradeFields,
    presentation::{
        layout::{render_form_page, render_listing_page},
        FormValues,
    },
};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
    routing::get,
    Form, Router,
};
use serde::Deserialize;

/// Query string of the listing page
#[derive(Debug, Default, Deserialize)]
pub struct ListingQuery {
    /// Requested page; kept as text so bad values are ignored instead of rejected
    pub page: Option<String>,
}

/// Create page routes
pub fn create_page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(show_form).post(submit_form))
        .route("/grades", get(show_listing))
}

/// Link target for a page control
pub fn listing_href(page: usize) -> String {
    format!("/grades?page={page}")
}

/// Empty input form
///
/// GET /
pub async fn show_form() -> Result<Html<String>, StatusCode> {
    page_html(render_form_page(&FormValues::default(), None))
}

/// Form submit
///
/// POST /
/// Body: student_name=...&student_id=...&course=...&score=...
pub async fn submit_form(
    State(state): State<AppState>,
    Form(raw): Form<RawGradeFields>,
) -> Result<Html<String>, StatusCode> {
    let outcome = state.form.submit(raw).await;
    tracing::info!(status = ?outcome.status, "📝 Grade form submitted");
    page_html(render_form_page(&outcome.form, Some(&outcome.notification)))
}

/// Listing page
///
/// GET /grades          reloads every record and shows page 1
/// GET /grades?page=N   moves within the cached records; out-of-range N is ignored
pub async fn show_listing(
    State(state): State<AppState>,
    Query(query): Query<ListingQuery>,
) -> Result<Html<String>, StatusCode> {
    let (listing, notification) = match query.page {
        None => {
            let (listing, notification) = state.listing.reload().await;
            (listing, Some(notification))
        }
        // unparseable pages (negative, text) count as out of range
        Some(page) => match page.trim().parse::<usize>() {
            Ok(page) => state.listing.navigate(page).await,
            Err(_) => state.listing.current().await,
        },
    };
    page_html(render_listing_page(&listing, notification.as_ref(), listing_href))
}

fn page_html(rendered: Result<String, minijinja::Error>) -> Result<Html<String>, StatusCode> {
    rendered.map(Html).map_err(|e| {
        tracing::error!(error = %e, "❌ Failed to render page");
        StatusCode::INTERNAL_SERVER_ERROR
    })
}
