//! Authentication Module
//!
//! This module handles broker authentication and session management. It
//! provides the credential store boundary, the credential check itself, the
//! session cookie codec, and the HTTP handlers for the auth endpoints.
//!
//! # Architecture
//!
//! The auth module is organized into focused submodules:
//!
//! - **`brokers`** - Broker model and the `CredentialStore` trait with its
//!   PostgreSQL and in-memory implementations
//! - **`authenticator`** - The credential check (lookup + bcrypt verify)
//! - **`sessions`** - Session type, signed-cookie codec and session accessor
//! - **`handlers`** - HTTP handlers for login, logout and me
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs           - Module exports and documentation
//! ├── brokers.rs       - Broker model and credential store
//! ├── authenticator.rs - Credential verification
//! ├── sessions.rs      - Session codec and cookie handling
//! └── handlers/        - HTTP handlers
//!     ├── mod.rs       - Handler exports
//!     ├── types.rs     - Request/response types
//!     ├── login.rs     - Login handler
//!     ├── logout.rs    - Logout handler
//!     └── me.rs        - Current-session handler
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Login**: name + password → case-insensitive broker lookup → bcrypt
//!    verify → `Session` → signed cookie set on the response
//! 2. **Me**: session cookie → decoded `Session` → broker identity returned
//! 3. **Logout**: session cookie cleared
//!
//! # Security
//!
//! - Passwords are stored as bcrypt hashes and verified in constant time
//! - Sessions live only in the signed cookie; there is no server-side
//!   session table and nothing to revoke on logout beyond the cookie
//! - A `Session` value is only ever produced by a successful credential
//!   check or by decoding a validly signed cookie

/// Broker model and credential store
pub mod brokers;

/// Credential verification
pub mod authenticator;

/// Session codec and cookie handling
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use brokers::{Broker, CredentialStore, InMemoryCredentialStore, PgCredentialStore};
pub use handlers::{login, logout, me};
pub use sessions::{Session, SessionKeys};
