//! Traption API
//!
//! REST surface for the caption generation service.

pub mod handlers;
pub mod router;
pub mod state;

pub use handlers::ErrorResponse;
pub use router::create_router;
pub use state::AppState;
