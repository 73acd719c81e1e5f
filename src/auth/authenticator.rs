/**
 * Authenticator
 *
 * The credential check: looks a broker up by name (case-insensitively) and
 * verifies the password against the stored bcrypt hash, producing a
 * `Session` on success.
 *
 * # Security
 *
 * - Password verification uses bcrypt's constant-time comparison
 * - "Broker not found" and "wrong password" both surface as the single
 *   `InvalidCredentials` failure so callers cannot enumerate accounts
 * - The stored hash never leaves this function
 */

use crate::auth::brokers::CredentialStore;
use crate::auth::sessions::Session;
use crate::error::AuthError;

/// Check a broker's credentials and issue a session
///
/// The route layer is responsible for rejecting empty fields before calling
/// this; `name` and `password` are assumed non-empty here.
///
/// # Arguments
///
/// * `store` - Credential store to look the broker up in
/// * `name` - Broker login name (matched case-insensitively)
/// * `password` - Cleartext password to verify
///
/// # Errors
///
/// * `InvalidCredentials` - Unknown name or wrong password
/// * `Store` - The credential store failed
/// * `Hash` - The stored hash was malformed
pub async fn login(
    store: &dyn CredentialStore,
    name: &str,
    password: &str,
) -> Result<Session, AuthError> {
    let broker = store
        .find_by_name(name)
        .await?
        .ok_or(AuthError::InvalidCredentials)?;

    let valid = bcrypt::verify(password, &broker.password_hash)?;
    if !valid {
        return Err(AuthError::InvalidCredentials);
    }

    tracing::info!("broker logged in: {} ({})", broker.broker_name, broker.id);

    Ok(Session::issue(broker.id, broker.broker_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::brokers::InMemoryCredentialStore;

    async fn store_with_broker(name: &str, password: &str) -> InMemoryCredentialStore {
        let store = InMemoryCredentialStore::new();
        let hash = bcrypt::hash(password, 4).unwrap();
        store
            .create_broker(name, "broker@moanayachting.com", &hash)
            .await
            .unwrap();
        store
    }

    #[tokio::test]
    async fn test_login_success() {
        let store = store_with_broker("PE", "correct horse").await;

        let session = login(&store, "PE", "correct horse").await.unwrap();
        assert_eq!(session.broker_name, "PE");
    }

    #[tokio::test]
    async fn test_login_case_insensitive_name() {
        let store = store_with_broker("PE", "correct horse").await;

        let session = login(&store, "pe", "correct horse").await.unwrap();
        // The session carries the stored casing, not the submitted one.
        assert_eq!(session.broker_name, "PE");
    }

    #[tokio::test]
    async fn test_login_session_matches_broker_id() {
        let store = InMemoryCredentialStore::new();
        let hash = bcrypt::hash("secret", 4).unwrap();
        let broker = store
            .create_broker("JMo", "jmo@moanayachting.com", &hash)
            .await
            .unwrap();

        let session = login(&store, "JMo", "secret").await.unwrap();
        assert_eq!(session.broker_id, broker.id);
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let store = store_with_broker("PE", "correct horse").await;

        let err = login(&store, "PE", "wrong").await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_login_unknown_broker() {
        let store = store_with_broker("PE", "correct horse").await;

        let err = login(&store, "nobody", "correct horse").await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_failure_modes_indistinguishable() {
        let store = store_with_broker("PE", "correct horse").await;

        let wrong_password = login(&store, "PE", "wrong").await.unwrap_err();
        let unknown_broker = login(&store, "nobody", "wrong").await.unwrap_err();

        assert_eq!(
            wrong_password.client_message(),
            unknown_broker.client_message()
        );
        assert_eq!(
            wrong_password.status_code(),
            unknown_broker.status_code()
        );
    }
}
