//! Authentication Handlers Module
//!
//! HTTP handlers for the authentication endpoints.
//!
//! # Handlers
//!
//! - **`login`** - POST /api/auth/login - Credential check, sets the cookie
//! - **`logout`** - POST /api/auth/logout - Clears the cookie
//! - **`me`** - GET /api/auth/me - Returns the decoded session
//!
//! All responses are JSON. The handlers validate input, delegate to the
//! authenticator and session codec, and rely on `AuthError`'s
//! `IntoResponse` conversion for every failure path.

/// Request and response types
pub mod types;

/// Login handler
pub mod login;

/// Logout handler
pub mod logout;

/// Current-session handler
pub mod me;

// Re-export commonly used types
pub use types::{LoginRequest, LoginResponse, LogoutResponse, MeResponse};

// Re-export handlers
pub use login::login;
pub use logout::logout;
pub use me::me;
