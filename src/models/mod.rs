/// # Health Status Response
///
/// Store reachability reported by `GET /api/health`.
pub mod health;

/// # Status Check Records
///
/// The canonical [`StatusCheck`], its stored document form and the small
/// response bodies the status routes answer with.
///
/// [`StatusCheck`]: crate::models::status_check::StatusCheck
pub mod status_check;

pub use health::HealthResponse;
pub use status_check::{
    DeleteResponse, MessageResponse, StatusCheck, StatusCheckCreate, StatusCheckDocument,
};
