/// Gradeform: student grade entry and listing service
///
/// Validates grade submissions, appends them to a document store and renders a
/// paginated listing of everything stored.

// Core configuration and setup
pub mod config;

// Document store abstraction with SQLite and in-memory backends
pub mod store;

// Grade records, validation and the persistence gateway
pub mod grade;

// Notifications, pagination, table rendering and page controllers
pub mod presentation;

// HTTP layer - pages and JSON endpoints
pub mod api;

// Server setup and initialization
pub mod server;

// Re-export commonly used types for external consumers
pub use grade::{validate, GradeGateway, GradeRecord, RawGradeFields, Rejection};
pub use server::{build_router, start_server};
pub use store::{DocumentStore, StoreBackend};
