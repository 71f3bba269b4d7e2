//! REST API implementation
//!
//! Modular REST API with clean separation of concerns:
//! - types: Request/response type definitions
//! - normalize: Empty-string-means-absent input normalization
//! - extractors: Custom request extractors and middleware
//! - handlers: API endpoint handlers
//! - router: Router creation and configuration
//! - tests: Unit tests for all components

mod extractors;
mod handlers;
mod normalize;
mod router;
mod tests;
pub mod types;

// Re-export public API
pub use extractors::JsonExtractor;
pub use router::create_router;
pub use types::{AppState, EncounterRequestPayload, HealthResponse, SetName};
