/**
 * Broker Model and Credential Store
 *
 * This module defines the broker data model and the credential store
 * boundary. The store itself is an external collaborator (a managed
 * PostgreSQL instance), so it is expressed as a trait with a PostgreSQL
 * implementation for production and an in-memory implementation for tests
 * and local development.
 *
 * # Name Matching
 *
 * Broker names are compared case-insensitively: names were migrated from an
 * earlier scheme with inconsistent casing, so `pe` and `PE` refer to the
 * same broker. Names are stored exactly as provisioned; only reads
 * normalize.
 */

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::error::AuthError;

/// Broker struct representing a row in the brokers table
///
/// Read-only from the authentication path. The `password_hash` never leaves
/// this boundary except into bcrypt verification.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Broker {
    /// Unique broker ID (UUID), immutable
    pub id: Uuid,
    /// Display/login name; comparison is case-insensitive
    pub broker_name: String,
    /// Broker email address
    pub email: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

/// Credential store boundary
///
/// The authenticator only ever reads through this trait; `create_broker`
/// exists for provisioning and test fixtures.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Look up a broker by name, case-insensitively
    ///
    /// # Returns
    /// Broker or None if no name matches
    async fn find_by_name(&self, name: &str) -> Result<Option<Broker>, AuthError>;

    /// Create a new broker
    ///
    /// # Arguments
    /// * `broker_name` - Display/login name, stored as given
    /// * `email` - Broker email
    /// * `password_hash` - bcrypt hash of the broker's password
    async fn create_broker(
        &self,
        broker_name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<Broker, AuthError>;
}

/// PostgreSQL credential store
///
/// Wraps a `sqlx::PgPool`. The pool is externally synchronized; this type
/// is cheap to clone and share across handlers.
#[derive(Clone)]
pub struct PgCredentialStore {
    pool: PgPool,
}

impl PgCredentialStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CredentialStore for PgCredentialStore {
    async fn find_by_name(&self, name: &str) -> Result<Option<Broker>, AuthError> {
        let broker = sqlx::query_as::<_, Broker>(
            r#"
            SELECT id, broker_name, email, password_hash, created_at, updated_at
            FROM brokers
            WHERE LOWER(broker_name) = LOWER($1)
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(broker)
    }

    async fn create_broker(
        &self,
        broker_name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<Broker, AuthError> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        let broker = sqlx::query_as::<_, Broker>(
            r#"
            INSERT INTO brokers (id, broker_name, email, password_hash, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, broker_name, email, password_hash, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(broker_name)
        .bind(email)
        .bind(password_hash)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(broker)
    }
}

/// In-memory credential store
///
/// Backs the integration tests and local development without a database.
/// Matches the PostgreSQL store's behavior, including case-insensitive
/// name lookup.
#[derive(Clone, Default)]
pub struct InMemoryCredentialStore {
    brokers: Arc<Mutex<Vec<Broker>>>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn find_by_name(&self, name: &str) -> Result<Option<Broker>, AuthError> {
        let brokers = self.brokers.lock().expect("broker store lock poisoned");
        Ok(brokers
            .iter()
            .find(|b| b.broker_name.eq_ignore_ascii_case(name))
            .cloned())
    }

    async fn create_broker(
        &self,
        broker_name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<Broker, AuthError> {
        let now = Utc::now();
        let broker = Broker {
            id: Uuid::new_v4(),
            broker_name: broker_name.to_string(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            created_at: now,
            updated_at: now,
        };

        let mut brokers = self.brokers.lock().expect("broker store lock poisoned");
        brokers.push(broker.clone());
        Ok(broker)
    }
}
