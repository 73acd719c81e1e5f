/**
 * Server Configuration
 *
 * Loads configuration from environment variables and sets up the database
 * connection.
 *
 * # Configuration Sources
 *
 * - `DATABASE_URL` - PostgreSQL connection string (required)
 * - `SESSION_SECRET` - Secret for signing session cookies (a development
 *   fallback is used, with a warning, when unset)
 * - `SERVER_PORT` - Listen port, default 3000
 * - `COOKIE_SECURE` - Set to `true`/`1` to mark session cookies `Secure`
 *
 * Unlike optional integrations, the database is the credential store for
 * the whole application, so a missing `DATABASE_URL` or failed connection
 * aborts startup instead of degrading.
 */

use sqlx::PgPool;
use thiserror::Error;

/// Configuration/startup errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("DATABASE_URL is not set")]
    MissingDatabaseUrl,

    #[error("invalid SERVER_PORT: {0}")]
    InvalidPort(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Server configuration loaded from the environment
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listen port
    pub port: u16,
    /// Secret for session cookie signing
    pub session_secret: String,
    /// Whether session cookies carry the `Secure` attribute
    pub cookie_secure: bool,
}

impl ServerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match std::env::var("SERVER_PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => 3000,
        };

        let session_secret = std::env::var("SESSION_SECRET").unwrap_or_else(|_| {
            tracing::warn!("SESSION_SECRET not set, using development fallback");
            "moana-dev-secret-change-in-production".to_string()
        });

        let cookie_secure = std::env::var("COOKIE_SECURE")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);

        Ok(Self {
            port,
            session_secret,
            cookie_secure,
        })
    }
}

/// Connect to the database and run migrations
///
/// # Errors
///
/// Fails when `DATABASE_URL` is unset, the pool cannot be created, or the
/// migrations cannot be applied. All three are startup-fatal: the server
/// has no credential store without them.
pub async fn connect_database() -> Result<PgPool, ConfigError> {
    let database_url =
        std::env::var("DATABASE_URL").map_err(|_| ConfigError::MissingDatabaseUrl)?;

    tracing::info!("connecting to database...");
    let pool = PgPool::connect(&database_url).await?;
    tracing::info!("database connection pool created");

    tracing::info!("running database migrations...");
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("database migrations complete");

    Ok(pool)
}
