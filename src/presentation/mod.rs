/// Presentation Layer
///
/// Everything the user sees, rendered server-side:
/// - Typed notifications with auto-dismiss timing
/// - Page-window computation and page controls over an explicit view state
/// - Table rows and the two page bodies, rendered from minijinja templates
/// - Controllers that wire submits and page clicks to validator and gateway

pub mod templates;
pub mod notification;
pub mod pagination;
pub mod table;
pub mod layout;

// Submit handling for the input page
pub mod form;

// View-state owner for the listing page
pub mod listing;

pub use form::{FormController, FormOutcome, FormValues, SubmitStatus};
pub use listing::ListingController;
pub use notification::{Notification, NotificationKind};
pub use pagination::{ListingState, PageControl, PAGE_SIZE};
