/**
 * Session Codec and Cookie Handling
 *
 * This module defines the `Session` type, the signed-cookie codec that
 * serializes it, and the accessor that reads the current request's session
 * from the cookie jar.
 *
 * # Representation
 *
 * A session is carried as an HS256-signed JWT in an HTTP-only cookie named
 * `moana_session`. There is no server-side session table: the cookie is the
 * session. Tampering with any byte of the cookie value invalidates the
 * signature, so `decode_session` returns `None` for anything a client could
 * have forged, as well as for missing, malformed or expired values - never
 * an error that aborts the caller.
 */

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Name of the session cookie
pub const SESSION_COOKIE: &str = "moana_session";

/// Session lifetime in seconds (24 hours)
pub const SESSION_MAX_AGE_SECS: i64 = 24 * 60 * 60;

/// An authenticated broker session
///
/// Invariant: only ever produced by a successful credential check
/// ([`crate::auth::authenticator::login`]) or by decoding a validly signed
/// cookie. Never constructed from unvalidated client input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Identifier of the authenticated broker
    pub broker_id: Uuid,
    /// Display name, duplicated into the session for convenience
    pub broker_name: String,
    /// Expiry as a Unix timestamp (seconds)
    pub expires_at: i64,
}

impl Session {
    /// Issue a fresh session for a broker, expiring in
    /// [`SESSION_MAX_AGE_SECS`]
    pub fn issue(broker_id: Uuid, broker_name: String) -> Self {
        Self {
            broker_id,
            broker_name,
            expires_at: Utc::now().timestamp() + SESSION_MAX_AGE_SECS,
        }
    }
}

/// JWT claims carried in the session cookie
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    /// Broker ID
    sub: String,
    /// Broker display name
    name: String,
    /// Expiration time (Unix timestamp)
    exp: i64,
    /// Issued at time (Unix timestamp)
    iat: i64,
}

/// Signing keys for the session cookie
///
/// Both keys are derived from the same `SESSION_SECRET`. Cheap to clone and
/// held in the application state rather than re-derived per request.
#[derive(Clone)]
pub struct SessionKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl SessionKeys {
    pub fn from_secret(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }
}

/// Encode a session into a signed cookie value
pub fn encode_session(
    keys: &SessionKeys,
    session: &Session,
) -> Result<String, jsonwebtoken::errors::Error> {
    let claims = Claims {
        sub: session.broker_id.to_string(),
        name: session.broker_name.clone(),
        exp: session.expires_at,
        iat: Utc::now().timestamp(),
    };

    encode(&Header::default(), &claims, &keys.encoding)
}

/// Decode a cookie value back into a session
///
/// Returns `None` for anything that is not a currently valid, untampered
/// token: bad signature, malformed structure, expired claims or an
/// unparseable broker ID all land here. Callers treat `None` as "no
/// session" and never see the underlying reason.
pub fn decode_session(keys: &SessionKeys, value: &str) -> Option<Session> {
    let token = decode::<Claims>(value, &keys.decoding, &Validation::default()).ok()?;
    let broker_id = Uuid::parse_str(&token.claims.sub).ok()?;

    Some(Session {
        broker_id,
        broker_name: token.claims.name,
        expires_at: token.claims.exp,
    })
}

/// Read the current request's session from the cookie jar
///
/// Pure read: never mutates the jar. Safe to call from both API handlers
/// and page render paths.
pub fn session_from_jar(keys: &SessionKeys, jar: &CookieJar) -> Option<Session> {
    let cookie = jar.get(SESSION_COOKIE)?;
    decode_session(keys, cookie.value())
}

/// Build the session cookie for a signed value
///
/// HTTP-only and `SameSite=Lax`, scoped to the whole site, with a max-age
/// matching the session lifetime. `secure` is driven by configuration so
/// local development over plain HTTP still works.
pub fn session_cookie(value: String, secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, value))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(time::Duration::seconds(SESSION_MAX_AGE_SECS))
        .secure(secure)
        .build()
}

/// Build the removal cookie that clears the session
///
/// Mirrors the issuing cookie's attributes so strict user agents treat the
/// pair as the same cookie.
pub fn removal_cookie() -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, ""))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_keys() -> SessionKeys {
        SessionKeys::from_secret("test-session-secret")
    }

    #[test]
    fn test_encode_session() {
        let session = Session::issue(Uuid::new_v4(), "PE".to_string());
        let token = encode_session(&test_keys(), &session).unwrap();
        assert!(!token.is_empty());
    }

    #[test]
    fn test_decode_round_trip() {
        let keys = test_keys();
        let session = Session::issue(Uuid::new_v4(), "PE".to_string());

        let token = encode_session(&keys, &session).unwrap();
        let decoded = decode_session(&keys, &token).unwrap();

        assert_eq!(decoded, session);
    }

    #[test]
    fn test_token_claims_carry_issue_time() {
        let keys = test_keys();
        let session = Session::issue(Uuid::new_v4(), "PE".to_string());
        let token = encode_session(&keys, &session).unwrap();

        let claims = decode::<Claims>(&token, &keys.decoding, &Validation::default())
            .unwrap()
            .claims;
        assert!(claims.iat <= Utc::now().timestamp());
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_decode_garbage_is_none() {
        let keys = test_keys();
        assert!(decode_session(&keys, "not.a.token").is_none());
        assert!(decode_session(&keys, "").is_none());
    }

    #[test]
    fn test_decode_wrong_key_is_none() {
        let session = Session::issue(Uuid::new_v4(), "PE".to_string());
        let token = encode_session(&test_keys(), &session).unwrap();

        let other_keys = SessionKeys::from_secret("a-different-secret");
        assert!(decode_session(&other_keys, &token).is_none());
    }

    #[test]
    fn test_decode_expired_is_none() {
        let keys = test_keys();
        let session = Session {
            broker_id: Uuid::new_v4(),
            broker_name: "PE".to_string(),
            // Well past the default validation leeway.
            expires_at: Utc::now().timestamp() - SESSION_MAX_AGE_SECS,
        };

        let token = encode_session(&keys, &session).unwrap();
        assert!(decode_session(&keys, &token).is_none());
    }

    #[test]
    fn test_session_from_jar_missing_cookie() {
        let jar = CookieJar::new();
        assert!(session_from_jar(&test_keys(), &jar).is_none());
    }

    #[test]
    fn test_session_from_jar_round_trip() {
        let keys = test_keys();
        let session = Session::issue(Uuid::new_v4(), "JMo".to_string());
        let token = encode_session(&keys, &session).unwrap();

        let jar = CookieJar::new().add(session_cookie(token, false));
        let read = session_from_jar(&keys, &jar).unwrap();
        assert_eq!(read, session);
    }

    #[test]
    fn test_session_cookie_attributes() {
        let cookie = session_cookie("value".to_string(), true);
        assert_eq!(cookie.name(), SESSION_COOKIE);
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.secure(), Some(true));
    }

    #[test]
    fn test_removal_cookie_mirrors_attributes() {
        let cookie = removal_cookie();
        assert_eq!(cookie.name(), SESSION_COOKIE);
        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.path(), Some("/"));
    }
}
