/**
 * Server Initialization
 *
 * Assembles the application: database connection, credential store,
 * session keys, router.
 */

use axum::Router;
use std::sync::Arc;

use crate::auth::brokers::PgCredentialStore;
use crate::auth::sessions::SessionKeys;
use crate::routes::router::create_router;
use crate::server::config::{connect_database, ConfigError, ServerConfig};
use crate::server::state::AppState;

/// Create and configure the Axum application
///
/// # Initialization Steps
///
/// 1. Connect to the database and run migrations
/// 2. Wrap the pool in the PostgreSQL credential store
/// 3. Derive the session signing keys from the configured secret
/// 4. Assemble the router with the shared state
///
/// # Errors
///
/// Fails when the database is unreachable or unconfigured; the credential
/// store is required, so there is no degraded mode.
pub async fn create_app(config: &ServerConfig) -> Result<Router<()>, ConfigError> {
    tracing::info!("initializing moana brokerage backend");

    let pool = connect_database().await?;
    let store = Arc::new(PgCredentialStore::new(pool));

    let app_state = AppState {
        store,
        session_keys: SessionKeys::from_secret(&config.session_secret),
        cookie_secure: config.cookie_secure,
    };

    tracing::info!("router configured");
    Ok(create_router(app_state))
}
