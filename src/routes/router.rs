//! Router Configuration
//!
//! Combines the page and API route configurations into the single Axum
//! router the server runs.
//!
//! # Route Order
//!
//! 1. Page routes (`/`, `/login`, `/dashboard`)
//! 2. API routes (`/api/auth/*`)
//! 3. Fallback handler (404)
//!
//! Request tracing is layered over the whole router.

use axum::http::StatusCode;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::routes::api_routes::configure_api_routes;
use crate::routes::page_routes::configure_page_routes;
use crate::server::state::AppState;

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new();
    let router = configure_page_routes(router);
    let router = configure_api_routes(router);

    router
        .fallback(|| async { (StatusCode::NOT_FOUND, "404 Not Found") })
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
