//! Request handlers, one module per ERP route group.
//!
//! List handlers return fixed records. Create handlers echo the known input
//! fields with an id from the state's generator. Nothing is stored.

pub mod auth;
pub mod clients;
pub mod dashboard;
pub mod dental;
pub mod mechanic;
pub mod store;
pub mod subscriptions;
pub mod system;

use chrono::{SecondsFormat, Utc};
use serde::Serialize;

/// Echoed input with its generated id.
#[derive(Debug, Clone, Serialize)]
pub struct Created<T> {
    pub id: u64,
    #[serde(flatten)]
    pub fields: T,
}

impl<T> Created<T> {
    pub fn new(id: u64, fields: T) -> Self {
        Self { id, fields }
    }
}

/// Current UTC time as RFC 3339 with millisecond precision, e.g. `2025-11-26T14:00:00.000Z`.
pub(crate) fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
