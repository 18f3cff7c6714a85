//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID)
//!     → routing (route table → handler)
//!     → body.rs (lenient JSON decoding)
//!     → envelope.rs / error.rs (success or failure envelope)
//!     → middleware/error_envelope.rs (fault logging, dev-mode detail)
//!     → Send to client
//! ```

pub mod body;
pub mod envelope;
pub mod error;
pub mod middleware;
pub mod request;
pub mod server;

#[cfg(test)]
pub(crate) mod testing;

pub use body::JsonBody;
pub use envelope::{Envelope, Failure};
pub use error::ApiError;
pub use request::{RequestIdExt, X_REQUEST_ID};
pub use server::{apply_layers, build_router, ApiServer, AppState};
