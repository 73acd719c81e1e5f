/**
 * Error Conversion
 *
 * Implements `IntoResponse` for `AuthError` so handlers can return
 * `Result<_, AuthError>` directly.
 *
 * # Response Format
 *
 * Error responses are JSON with the following structure:
 * ```json
 * {
 *   "error": "Identifiants invalides"
 * }
 * ```
 *
 * # Logging
 *
 * Internal failures (store, codec, hash) are logged at `error` level with
 * full detail at this boundary; credential rejections are logged at `warn`.
 * The response body only ever carries the generic localized message.
 */

use axum::response::{IntoResponse, Json, Response};

use crate::error::types::AuthError;

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match &self {
            AuthError::Store(e) => tracing::error!("credential store failure: {:?}", e),
            AuthError::Codec(e) => tracing::error!("session codec failure: {:?}", e),
            AuthError::Hash(e) => tracing::error!("password verification failure: {:?}", e),
            AuthError::InvalidCredentials => tracing::warn!("login rejected: invalid credentials"),
            AuthError::Unauthenticated => tracing::debug!("request without a valid session"),
            AuthError::Validation(detail) => tracing::debug!("validation failure: {}", detail),
        }

        let status = self.status_code();
        let body = serde_json::json!({ "error": self.client_message() });

        (status, Json(body)).into_response()
    }
}
