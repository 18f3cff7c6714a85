//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route Compilation (at startup):
//!     route_table() (method, `:param` template, handler)
//!     → table.rs (translate templates, mount on Axum Router)
//!     → Freeze as immutable Router
//!
//! Incoming Request (method, path)
//!     → Axum path match → handler
//!     → no match → fallback 404 envelope
//! ```
//!
//! # Design Decisions
//! - One flat table; route groups share no state
//! - Routes compiled at startup, immutable at runtime

pub mod table;

pub use table::{RouteEntry, RouteTable, Verb};

use crate::handlers::{auth, clients, dashboard, dental, mechanic, store, subscriptions, system};

/// Every route the API serves.
pub fn route_table() -> RouteTable {
    RouteTable::new()
        .add(Verb::Get, "/", "banner", system::banner)
        .add(Verb::Get, "/health", "health", system::health)
        // Authentication
        .add(Verb::Post, "/api/auth/login", "login", auth::login)
        .add(Verb::Post, "/api/auth/register", "register", auth::register)
        // Clients
        .add(Verb::Get, "/api/clients", "list_clients", clients::list)
        .add(Verb::Post, "/api/clients", "create_client", clients::create)
        .add(Verb::Get, "/api/clients/:id", "get_client", clients::get)
        .add(Verb::Put, "/api/clients/:id", "update_client", clients::update)
        .add(Verb::Delete, "/api/clients/:id", "delete_client", clients::delete)
        // Subscriptions
        .add(Verb::Get, "/api/subscriptions/check/:userId", "check_subscription", subscriptions::check)
        .add(Verb::Post, "/api/subscriptions/validate", "validate_subscription", subscriptions::validate)
        // Dashboard
        .add(Verb::Get, "/api/dashboard/stats", "dashboard_stats", dashboard::stats)
        // Dental
        .add(Verb::Get, "/api/dental/appointments", "list_appointments", dental::list)
        .add(Verb::Post, "/api/dental/appointments", "create_appointment", dental::create)
        // Mechanic
        .add(Verb::Get, "/api/mechanic/workorders", "list_workorders", mechanic::list)
        .add(Verb::Post, "/api/mechanic/workorders", "create_workorder", mechanic::create)
        // Store
        .add(Verb::Get, "/api/store/products", "list_products", store::products)
        .add(Verb::Post, "/api/store/sales", "create_sale", store::create_sale)
}
