//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Mount the route table on an Axum Router
//! - Wire up middleware (tracing, request ID, CORS, timeout, metrics, fallback errors)
//! - Bind server to listener and serve until shutdown

use axum::{
    body::Body,
    error_handling::HandleErrorLayer,
    http::Request,
    middleware,
    BoxError, Router,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::{timeout::error::Elapsed, Layer, ServiceBuilder};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::CorsLayer,
    normalize_path::{NormalizePath, NormalizePathLayer},
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::config::ApiConfig;
use crate::http::error::{panic_response, ApiError};
use crate::http::middleware::{error_envelope, track_metrics};
use crate::http::request::{RequestIdExt, UuidRequestId};
use crate::ids::{ClockIds, IdGenerator};
use crate::routing::route_table;

/// Application state injected into handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    pub config: Arc<ApiConfig>,
    pub ids: Arc<dyn IdGenerator>,
}

impl AppState {
    pub fn new(config: ApiConfig, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            config: Arc::new(config),
            ids,
        }
    }

    /// Next record id for create handlers.
    pub fn next_id(&self) -> u64 {
        self.ids.next_id()
    }
}

/// HTTP server for the ERP API.
pub struct ApiServer {
    router: Router,
    state: AppState,
}

impl ApiServer {
    /// Create a server whose ids come from the wall clock.
    pub fn new(config: ApiConfig) -> Self {
        Self::with_ids(config, Arc::new(ClockIds::new()))
    }

    /// Create a server with an explicit id generator.
    pub fn with_ids(config: ApiConfig, ids: Arc<dyn IdGenerator>) -> Self {
        let state = AppState::new(config, ids);
        let router = build_router(state.clone());
        Self { router, state }
    }

    /// The fully layered router, for in-process use.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ApiConfig {
        &self.state.config
    }

    /// Run the server until the shutdown channel fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            environment = %self.state.config.environment,
            "HTTP server starting"
        );

        let service = normalize_paths(self.router);
        let make_service = axum::ServiceExt::<Request<Body>>::into_make_service(service);
        axum::serve(listener, make_service)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Mount the route table and all middleware.
pub fn build_router(state: AppState) -> Router {
    let table = route_table();
    for entry in table.entries() {
        tracing::debug!(
            method = %entry.method,
            path = %entry.template,
            route = %entry.name,
            "Route mounted"
        );
    }

    let config = state.config.clone();
    let router = table
        .into_router()
        .fallback(not_found)
        .method_not_allowed_fallback(not_found)
        .with_state(state);

    apply_layers(router, &config)
}

/// Strip trailing slashes before routing, so `/health/` matches `/health`.
///
/// Runs in front of the router; a `Router::layer` would only see requests
/// after a route was already picked.
pub fn normalize_paths(router: Router) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router)
}

/// Wrap a router in the middleware stack.
///
/// Layer order, outermost first: request id, trace, request id propagation,
/// CORS, timeout, metrics, error envelope, panic catcher.
pub fn apply_layers(router: Router, config: &ApiConfig) -> Router {
    router
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(middleware::from_fn_with_state(config.environment, error_envelope))
        .layer(middleware::from_fn(track_metrics))
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_timeout))
                .timeout(Duration::from_secs(config.timeouts.request_secs)),
        )
        .layer(CorsLayer::permissive())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "request",
                method = %request.method(),
                path = %request.uri().path(),
                request_id = %request.request_id(),
            )
        }))
        .layer(SetRequestIdLayer::x_request_id(UuidRequestId))
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}

async fn handle_timeout(err: BoxError) -> ApiError {
    if err.is::<Elapsed>() {
        tracing::warn!("Request timed out");
        ApiError::Timeout
    } else {
        ApiError::Internal(err.to_string())
    }
}
