/**
 * API Route Handlers
 *
 * Route configuration for the authentication endpoints. All three are
 * public in the routing sense; `/api/auth/me` checks the session inside the
 * handler.
 */

use axum::Router;

use crate::auth::{login, logout, me};
use crate::server::state::AppState;

/// Configure API routes
///
/// - `POST /api/auth/login` - Broker login, sets the session cookie
/// - `POST /api/auth/logout` - Clears the session cookie
/// - `GET /api/auth/me` - Returns the decoded session or 401
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/api/auth/login", axum::routing::post(login))
        .route("/api/auth/logout", axum::routing::post(logout))
        .route("/api/auth/me", axum::routing::get(me))
}
