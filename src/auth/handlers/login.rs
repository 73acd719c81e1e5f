/**
 * Login Handler
 *
 * Implements POST /api/auth/login.
 *
 * # Authentication Process
 *
 * 1. Reject empty broker name or password (400)
 * 2. Look the broker up by case-insensitive name
 * 3. Verify the password with bcrypt
 * 4. Issue a session and set the signed cookie
 *
 * # Security
 *
 * - Unknown broker and wrong password both return 401 with the same body
 * - Passwords are never logged and never appear in responses
 */

use axum::{extract::State, response::Json};
use axum_extra::extract::CookieJar;

use crate::auth::authenticator;
use crate::auth::handlers::types::{LoginRequest, LoginResponse};
use crate::auth::sessions::{encode_session, session_cookie};
use crate::error::AuthError;
use crate::server::state::AppState;

/// Login handler
///
/// Verifies broker credentials and, on success, returns the broker's stored
/// display name and attaches the signed session cookie to the response.
///
/// # Errors
///
/// * `400 Bad Request` - Broker name or password missing/empty
/// * `401 Unauthorized` - Unknown broker or wrong password
/// * `500 Internal Server Error` - Store, hash or codec failure
///
/// # Example Request
///
/// ```http
/// POST /api/auth/login HTTP/1.1
/// Content-Type: application/json
///
/// {"broker": "PE", "password": "secret"}
/// ```
///
/// # Example Response
///
/// ```json
/// {"success": true, "broker": "PE"}
/// ```
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(request): Json<LoginRequest>,
) -> Result<(CookieJar, Json<LoginResponse>), AuthError> {
    if request.broker.trim().is_empty() || request.password.is_empty() {
        return Err(AuthError::Validation("broker and password are required"));
    }

    tracing::info!("login request for broker: {}", request.broker);

    let session =
        authenticator::login(state.store.as_ref(), &request.broker, &request.password).await?;

    let value = encode_session(&state.session_keys, &session)?;
    let jar = jar.add(session_cookie(value, state.cookie_secure));

    Ok((
        jar,
        Json(LoginResponse {
            success: true,
            broker: session.broker_name,
        }),
    ))
}
