//! frqforge-server — HTTP surface of the FRQ practice service.
//!
//! Three endpoints plus a health check: question generation, grading, and
//! the class-code-gated feedback page. All application logic lives in the
//! core/report crates; this crate is routing, state wiring, and error
//! translation.

pub mod response;
pub mod routes;
pub mod state;

pub use routes::routes;
pub use state::AppState;
