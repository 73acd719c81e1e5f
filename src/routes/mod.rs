//! Route Configuration Module
//!
//! Configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs         - Module exports and documentation
//! ├── router.rs      - Main router creation
//! ├── api_routes.rs  - JSON API endpoints
//! └── page_routes.rs - Server-rendered entry pages
//! ```
//!
//! # Routes
//!
//! ## API
//!
//! - `POST /api/auth/login` - Broker login
//! - `POST /api/auth/logout` - Clear the session cookie
//! - `GET /api/auth/me` - Current session
//!
//! ## Pages
//!
//! - `GET /` - Redirects to `/dashboard` or `/login` by session state
//! - `GET /login` - Login form, or redirect when already authenticated
//! - `GET /dashboard` - Dashboard, or redirect when unauthenticated

/// Main router creation
pub mod router;

/// JSON API endpoints
pub mod api_routes;

/// Server-rendered entry pages
pub mod page_routes;

// Re-export commonly used functions
pub use router::create_router;
