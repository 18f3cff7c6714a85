//! Static route table.
//!
//! Routes are declared with `:param` templates and translated to Axum's
//! `{param}` syntax when mounted. Each entry keeps a descriptor so the table
//! can be listed at startup and inspected in tests.

use axum::{
    handler::Handler,
    routing::{on, MethodFilter},
    Router,
};
use std::fmt;

use crate::http::server::AppState;

/// HTTP methods the table can mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

impl Verb {
    fn filter(self) -> MethodFilter {
        match self {
            Verb::Get => MethodFilter::GET,
            Verb::Post => MethodFilter::POST,
            Verb::Put => MethodFilter::PUT,
            Verb::Delete => MethodFilter::DELETE,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Verb::Get => "GET",
            Verb::Post => "POST",
            Verb::Put => "PUT",
            Verb::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Descriptor of one mounted route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    pub method: Verb,
    pub template: &'static str,
    pub name: &'static str,
}

/// Route descriptors plus the router they were mounted on.
pub struct RouteTable {
    entries: Vec<RouteEntry>,
    router: Router<AppState>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            router: Router::new(),
        }
    }

    /// Mount `handler` for `method` on `template`.
    ///
    /// Several methods may share a template; Axum merges them onto one path.
    pub fn add<H, T>(mut self, method: Verb, template: &'static str, name: &'static str, handler: H) -> Self
    where
        H: Handler<T, AppState>,
        T: 'static,
    {
        let path = to_router_path(template);
        self.router = self.router.route(&path, on(method.filter(), handler));
        self.entries.push(RouteEntry {
            method,
            template,
            name,
        });
        self
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    /// Find the entry declared for `method` and `template`.
    pub fn find(&self, method: Verb, template: &str) -> Option<&RouteEntry> {
        self.entries
            .iter()
            .find(|e| e.method == method && e.template == template)
    }

    pub fn into_router(self) -> Router<AppState> {
        self.router
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Translate `/a/:id/b` into `/a/{id}/b`.
pub fn to_router_path(template: &str) -> String {
    template
        .split('/')
        .map(|segment| match segment.strip_prefix(':') {
            Some(param) if !param.is_empty() => format!("{{{}}}", param),
            _ => segment.to_string(),
        })
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_translation() {
        assert_eq!(to_router_path("/"), "/");
        assert_eq!(to_router_path("/api/clients"), "/api/clients");
        assert_eq!(to_router_path("/api/clients/:id"), "/api/clients/{id}");
        assert_eq!(
            to_router_path("/api/subscriptions/check/:userId"),
            "/api/subscriptions/check/{userId}"
        );
        assert_eq!(to_router_path("/a/:x/b/:y"), "/a/{x}/b/{y}");
    }

    #[test]
    fn test_bare_colon_segment_left_alone() {
        assert_eq!(to_router_path("/a/:"), "/a/:");
    }

    #[test]
    fn test_entries_recorded_in_order() {
        async fn noop() {}

        let table = RouteTable::new()
            .add(Verb::Get, "/things", "list_things", noop)
            .add(Verb::Post, "/things", "create_thing", noop)
            .add(Verb::Delete, "/things/:id", "delete_thing", noop);

        let names: Vec<_> = table.entries().iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["list_things", "create_thing", "delete_thing"]);
        assert!(table.find(Verb::Post, "/things").is_some());
        assert!(table.find(Verb::Put, "/things").is_none());
    }
}
