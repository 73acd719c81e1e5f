/**
 * Backend Error Types
 *
 * This module defines the error taxonomy for the authentication backend.
 * Every handler failure is one of these variants, and each variant maps to
 * exactly one HTTP status code and one client-facing message.
 *
 * # Error Categories
 *
 * - `Validation` - Missing required fields (400)
 * - `InvalidCredentials` - Unknown broker or wrong password (401)
 * - `Unauthenticated` - Missing or invalid session cookie (401)
 * - `Store` / `Codec` / `Hash` - Internal failures (500)
 *
 * # Information Leakage
 *
 * "Broker not found" and "password mismatch" are both reported as
 * `InvalidCredentials` so a client cannot enumerate accounts. Internal
 * failures carry full detail for logs but the client only ever sees the
 * generic server-error message.
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Backend error type
///
/// Each variant carries enough context for server-side logging. The
/// client-facing message is derived in [`AuthError::client_message`] and is
/// intentionally generic for the 401/500 classes.
#[derive(Debug, Error)]
pub enum AuthError {
    /// A required request field is missing or empty
    #[error("validation error: {0}")]
    Validation(&'static str),

    /// Unknown broker name or wrong password
    ///
    /// Deliberately a single variant for both cases so the caller cannot
    /// tell which check failed.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// No session cookie, or one that failed to decode
    #[error("not authenticated")]
    Unauthenticated,

    /// Credential store failure
    #[error("credential store error: {0}")]
    Store(#[from] sqlx::Error),

    /// Session token encoding failure
    #[error("session codec error: {0}")]
    Codec(#[from] jsonwebtoken::errors::Error),

    /// Password hash verification failure (malformed stored hash)
    #[error("password verification error: {0}")]
    Hash(#[from] bcrypt::BcryptError),
}

impl AuthError {
    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `Validation` - 400 Bad Request
    /// - `InvalidCredentials` - 401 Unauthorized
    /// - `Unauthenticated` - 401 Unauthorized
    /// - `Store` / `Codec` / `Hash` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials | Self::Unauthenticated => StatusCode::UNAUTHORIZED,
            Self::Store(_) | Self::Codec(_) | Self::Hash(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the client-facing message for this error
    ///
    /// Messages are localized (the application UI is French) and generic:
    /// internal error detail never crosses this boundary.
    pub fn client_message(&self) -> &'static str {
        match self {
            Self::Validation(_) => "Nom d'utilisateur et mot de passe requis",
            Self::InvalidCredentials => "Identifiants invalides",
            Self::Unauthenticated => "Non authentifié",
            Self::Store(_) | Self::Codec(_) | Self::Hash(_) => "Erreur serveur",
        }
    }
}
