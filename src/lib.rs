//! Mock HTTP backend for an ERP prototype.
//!
//! Serves authentication, clients, subscriptions, dashboard, dental, mechanic
//! and store routes with fixed or echoed JSON envelopes. Nothing is persisted.

pub mod config;
pub mod handlers;
pub mod http;
pub mod ids;
pub mod lifecycle;
pub mod observability;
pub mod routing;

pub use config::ApiConfig;
pub use http::ApiServer;
pub use lifecycle::Shutdown;
