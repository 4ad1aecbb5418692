//! Wire types shared by the orchestrator, the HTTP function and the CLI.

pub mod context;
pub mod http;
pub mod outcome;

pub use context::RequestContext;
pub use outcome::ErrorKind;
pub use outcome::FALLBACK_RESPONSE;
pub use outcome::ProcessFailure;
pub use outcome::ProcessOutcome;
pub use outcome::ProcessSuccess;
