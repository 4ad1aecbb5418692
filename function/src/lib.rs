//! HTTP function exposing the request orchestrator.
//!
//! Routes:
//! - `/health` reports the agent name.
//! - any other path processes a `{"request": ..., "context": {...}}` body.
//! - `OPTIONS` on any path answers the CORS preflight.

pub mod cors;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use error::HttpError;
pub use router::router;
pub use router::serve;
pub use state::FunctionState;
