//! Moana Brokerage - Backend Library
//!
//! Session-based authentication backend for the Moana Yachting brokerage
//! application. Brokers log in with a name and password, receive a signed
//! session cookie, and are routed to the dashboard; the entry pages redirect
//! based on session state.
//!
//! # Module Structure
//!
//! The library is organized into focused modules:
//!
//! - **`auth`** - Credential store, authenticator, session codec and handlers
//! - **`error`** - Error taxonomy and HTTP response conversion
//! - **`pages`** - Server-rendered entry pages with session-based redirects
//! - **`routes`** - Route configuration and router assembly
//! - **`server`** - Configuration loading, application state, initialization
//!
//! # Authentication Flow
//!
//! 1. **Login**: Broker provides name and password → credentials verified
//!    against the store → signed session cookie issued
//! 2. **Me**: Session cookie decoded → broker identity returned
//! 3. **Logout**: Session cookie cleared
//!
//! # Security
//!
//! - Passwords are verified with bcrypt (constant-time comparison)
//! - Sessions are carried as signed JWT cookies; a tampered cookie decodes
//!   to no session rather than an error
//! - "Unknown broker" and "wrong password" are indistinguishable to clients

/// Credential store, authenticator, session codec and HTTP handlers
pub mod auth;

/// Error types and HTTP response conversion
pub mod error;

/// Server-rendered entry pages
pub mod pages;

/// Route configuration
pub mod routes;

/// Server setup, configuration and state
pub mod server;

// Re-export commonly used types
pub use error::AuthError;
pub use server::state::AppState;
