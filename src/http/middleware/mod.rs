//! Cross-cutting request middleware.

pub mod error_envelope;
pub mod metrics;

pub use self::error_envelope::error_envelope;
pub use self::metrics::track_metrics;
