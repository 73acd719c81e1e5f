//! Test fixtures and helpers
//!
//! Builds a test server over the in-memory credential store so the full
//! HTTP surface can be exercised without a database.

use std::sync::Arc;

use axum_test::TestServer;
use moana_brokerage::auth::brokers::{Broker, CredentialStore, InMemoryCredentialStore};
use moana_brokerage::auth::sessions::SessionKeys;
use moana_brokerage::routes::create_router;
use moana_brokerage::server::state::AppState;

/// Secret used for session signing in tests
pub const TEST_SECRET: &str = "test-session-secret";

/// Create an application state backed by an empty in-memory store
pub fn test_state() -> (AppState, InMemoryCredentialStore) {
    let store = InMemoryCredentialStore::new();
    let state = AppState {
        store: Arc::new(store.clone()),
        session_keys: SessionKeys::from_secret(TEST_SECRET),
        cookie_secure: false,
    };
    (state, store)
}

/// Create a broker with a bcrypt-hashed password
///
/// Uses the minimum bcrypt cost to keep the test suite fast.
pub async fn seed_broker(store: &InMemoryCredentialStore, name: &str, password: &str) -> Broker {
    let hash = bcrypt::hash(password, 4).expect("failed to hash test password");
    let email = format!("{}@moanayachting.com", name.to_lowercase());
    store
        .create_broker(name, &email, &hash)
        .await
        .expect("failed to seed test broker")
}

/// Build a test server that persists cookies across requests, like a
/// browser client would
pub fn test_server(state: AppState) -> TestServer {
    TestServer::builder()
        .save_cookies()
        .build(create_router(state))
        .expect("failed to build test server")
}
