/**
 * Current-Session Handler
 *
 * Implements GET /api/auth/me: decodes the session cookie and returns the
 * broker identity it carries. Expiry and tampering are detected here,
 * lazily, on the next request that presents the cookie - there is no
 * proactive invalidation.
 */

use axum::{extract::State, response::Json};
use axum_extra::extract::CookieJar;

use crate::auth::handlers::types::MeResponse;
use crate::auth::sessions::{session_from_jar, SessionKeys};
use crate::error::AuthError;

/// Current-session handler
///
/// Pure cookie read: no store access. A missing, malformed, tampered or
/// expired cookie uniformly yields 401.
///
/// # Example Response
///
/// ```json
/// {"broker": "PE", "brokerId": "123e4567-e89b-12d3-a456-426614174000"}
/// ```
pub async fn me(
    State(keys): State<SessionKeys>,
    jar: CookieJar,
) -> Result<Json<MeResponse>, AuthError> {
    let session = session_from_jar(&keys, &jar).ok_or(AuthError::Unauthenticated)?;

    Ok(Json(MeResponse {
        broker: session.broker_name,
        broker_id: session.broker_id,
    }))
}
