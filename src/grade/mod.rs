/// Grade Domain Layer
///
/// Everything about a single grade entry:
/// - Type definitions (GradeRecord, RawGradeFields, course catalog)
/// - Pure input validation
/// - Persistence gateway over a `DocumentStore`

// Record and input type definitions
pub mod types;

// Ordered, short-circuiting input checks
pub mod validator;

// Save/load against the document store, failures turned into signals
pub mod gateway;

pub use gateway::{GradeGateway, DEFAULT_COLLECTION};
pub use types::{GradeRecord, RawGradeFields, StoredGrade, COURSE_CATALOG};
pub use validator::{validate, Rejection};
