//! Session codec property tests
//!
//! Two laws from the session design:
//!
//! - every valid session survives an encode/decode round trip unchanged
//! - a cookie value altered in any single character no longer decodes

use chrono::Utc;
use moana_brokerage::auth::sessions::{decode_session, encode_session, Session, SessionKeys};
use proptest::prelude::*;
use uuid::Uuid;

const BASE64URL_ALPHABET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

fn arb_session() -> impl Strategy<Value = Session> {
    (
        any::<[u8; 16]>(),
        "[A-Za-z][A-Za-z0-9 ]{0,19}",
        // Always in the future so expiry validation never interferes.
        3600i64..86_400,
    )
        .prop_map(|(bytes, broker_name, ttl)| Session {
            broker_id: Uuid::from_bytes(bytes),
            broker_name,
            expires_at: Utc::now().timestamp() + ttl,
        })
}

proptest! {
    #[test]
    fn round_trip_preserves_session(session in arb_session()) {
        let keys = SessionKeys::from_secret("proptest-secret");

        let token = encode_session(&keys, &session).unwrap();
        let decoded = decode_session(&keys, &token);

        prop_assert_eq!(decoded, Some(session));
    }

    #[test]
    fn tampered_token_decodes_to_none(
        session in arb_session(),
        index in any::<prop::sample::Index>(),
        replacement in 0usize..64,
    ) {
        let keys = SessionKeys::from_secret("proptest-secret");
        let token = encode_session(&keys, &session).unwrap();

        let mut chars: Vec<char> = token.chars().collect();
        let i = index.index(chars.len());
        let replacement = BASE64URL_ALPHABET[replacement] as char;
        prop_assume!(replacement != chars[i]);

        chars[i] = replacement;
        let tampered: String = chars.into_iter().collect();

        prop_assert_eq!(decode_session(&keys, &tampered), None);
    }

    #[test]
    fn token_from_another_secret_decodes_to_none(session in arb_session()) {
        let signing = SessionKeys::from_secret("one-secret");
        let verifying = SessionKeys::from_secret("another-secret");

        let token = encode_session(&signing, &session).unwrap();
        prop_assert_eq!(decode_session(&verifying, &token), None);
    }
}
