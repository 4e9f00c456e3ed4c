use super::*;

fn forge(claims: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string().as_bytes());
    format!("{header}.{payload}.sig")
}

#[test]
fn decode_extracts_role_and_user_id() {
    let token = forge(&serde_json::json!({ "role": "admin", "userId": "u1" }));
    let claims = decode(&token).unwrap();
    assert_eq!(claims.role, "admin");
    assert_eq!(claims.user_id, "u1");
}

#[test]
fn decode_ignores_expiry_metadata() {
    let token = forge(&serde_json::json!({
        "role": "student",
        "userId": "u2",
        "iat": 1_700_000_000,
        "exp": 1_700_003_600
    }));
    assert_eq!(decode(&token).unwrap().user_id, "u2");
}

#[test]
fn decode_rejects_wrong_segment_count() {
    assert!(matches!(decode("not-a-token"), Err(TokenError::Malformed)));
    assert!(matches!(decode("a.b"), Err(TokenError::Malformed)));
    assert!(matches!(decode("a.b.c.d"), Err(TokenError::Malformed)));
    assert!(matches!(decode(""), Err(TokenError::Malformed)));
}

#[test]
fn decode_rejects_non_base64_payload() {
    assert!(matches!(decode("h.!!!.s"), Err(TokenError::Encoding(_))));
}

#[test]
fn decode_rejects_payload_without_claims_fields() {
    let payload = URL_SAFE_NO_PAD.encode(br#"{"sub":"u1"}"#);
    let token = format!("h.{payload}.s");
    assert!(matches!(decode(&token), Err(TokenError::Claims(_))));
}

// No signature check is performed client-side: a token whose signature could
// never verify still yields whatever claims it carries.
#[test]
fn decode_trusts_unverified_claims_verbatim() {
    let token = forge(&serde_json::json!({ "role": "admin", "userId": "intruder" }));
    let tampered = format!("{}.{}", token.rsplit_once('.').unwrap().0, "garbage-signature");
    let claims = decode(&tampered).unwrap();
    assert_eq!(claims.role, "admin");
    assert_eq!(claims.user_id, "intruder");
}
