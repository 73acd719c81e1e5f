//! Error Module
//!
//! This module defines the error taxonomy used across the backend and its
//! conversion into HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! # Propagation Policy
//!
//! The route layer is the sole boundary translating internal failures into
//! HTTP status codes. Handlers return `Result<_, AuthError>` and let the
//! `IntoResponse` conversion produce the response: internal detail is logged
//! server-side and never reaches the client, which only ever sees a
//! localized generic message.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::AuthError;
