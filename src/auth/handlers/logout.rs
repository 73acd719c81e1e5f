/**
 * Logout Handler
 *
 * Implements POST /api/auth/logout. The session lives only in the cookie,
 * so logging out is clearing it; there is no server-side state to destroy.
 */

use axum::response::Json;
use axum_extra::extract::CookieJar;

use crate::auth::handlers::types::LogoutResponse;
use crate::auth::sessions::removal_cookie;

/// Logout handler
///
/// Clears the session cookie. Succeeds whether or not a session was
/// present.
pub async fn logout(jar: CookieJar) -> (CookieJar, Json<LogoutResponse>) {
    tracing::debug!("logout request, clearing session cookie");

    let jar = jar.remove(removal_cookie());
    (jar, Json(LogoutResponse { success: true }))
}
