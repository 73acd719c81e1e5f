/**
 * Page Route Handlers
 *
 * Route configuration for the server-rendered entry pages.
 */

use axum::Router;

use crate::pages::{dashboard_page, home_page, login_page};
use crate::server::state::AppState;

/// Configure page routes
///
/// - `GET /` - Entry redirect by session state
/// - `GET /login` - Login form, or redirect when already authenticated
/// - `GET /dashboard` - Dashboard, or redirect when unauthenticated
pub fn configure_page_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/", axum::routing::get(home_page))
        .route("/login", axum::routing::get(login_page))
        .route("/dashboard", axum::routing::get(dashboard_page))
}
