/// HTTP API Layer
///
/// This module provides the routes of the grade form service. It handles:
/// - Server-rendered input and listing pages
/// - JSON endpoints for the same submit/list operations
/// - Shared application state

use crate::{
    grade::GradeGateway,
    presentation::{FormController, ListingController},
    store::StoreBackend,
};
use std::sync::Arc;

// Input form and listing pages (HTML)
pub mod pages;

// JSON endpoints
pub mod grades;

pub use grades::create_grade_routes;
pub use pages::create_page_routes;

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    /// Gateway to the configured document store
    pub gateway: Arc<GradeGateway<StoreBackend>>,
    /// Submit handling for the input page and the JSON submit
    pub form: Arc<FormController<StoreBackend>>,
    /// Owner of the listing view state
    pub listing: Arc<ListingController<StoreBackend>>,
}

impl AppState {
    /// Wire controllers around one gateway for `collection` in `store`
    pub fn new(store: StoreBackend, collection: impl Into<String>) -> Self {
        let gateway = Arc::new(GradeGateway::new(store, collection));
        Self {
            form: Arc::new(FormController::new(Arc::clone(&gateway))),
            listing: Arc::new(ListingController::new(Arc::clone(&gateway))),
            gateway,
        }
    }
}
