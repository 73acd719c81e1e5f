/**
 * Authentication Handler Types
 *
 * Request and response types for the authentication endpoints.
 */

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Login request
///
/// Fields default to empty strings so a missing field and an empty field
/// are rejected identically by the handler's validation, rather than
/// surfacing as a deserialization error.
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    /// Broker login name (matched case-insensitively)
    #[serde(default)]
    pub broker: String,
    /// Broker password (verified against the stored hash)
    #[serde(default)]
    pub password: String,
}

/// Login response
///
/// `broker` carries the stored display name, which may differ in casing
/// from what the client submitted.
#[derive(Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    pub success: bool,
    pub broker: String,
}

/// Logout response
#[derive(Serialize, Deserialize, Debug)]
pub struct LogoutResponse {
    pub success: bool,
}

/// Current-session response
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct MeResponse {
    /// Broker display name from the session
    pub broker: String,
    /// Broker ID from the session
    pub broker_id: Uuid,
}
