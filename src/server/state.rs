/**
 * Application State Management
 *
 * Defines the application state and the `FromRef` implementations that let
 * handlers extract just the part they need.
 *
 * # Thread Safety
 *
 * There is no in-process mutable state shared between requests: the state
 * is a store handle, the session signing keys and a cookie policy flag, all
 * of them cheap to clone. The credential store is externally synchronized.
 */

use axum::extract::FromRef;
use std::sync::Arc;

use crate::auth::brokers::CredentialStore;
use crate::auth::sessions::SessionKeys;

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    /// Credential store handle
    ///
    /// Behind a trait object so tests and local development can swap the
    /// PostgreSQL store for the in-memory one.
    pub store: Arc<dyn CredentialStore>,

    /// Keys for signing and verifying session cookies
    pub session_keys: SessionKeys,

    /// Whether session cookies carry the `Secure` attribute
    ///
    /// Off for local development over plain HTTP, on in production.
    pub cookie_secure: bool,
}

/// Lets handlers that only read sessions extract `State<SessionKeys>`
/// instead of the whole state.
impl FromRef<AppState> for SessionKeys {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.session_keys.clone()
    }
}
