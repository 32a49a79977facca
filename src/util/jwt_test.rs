use super::*;

fn token_with_payload(payload: &str) -> String {
    let engine = &base64::engine::general_purpose::URL_SAFE_NO_PAD;
    let header = engine.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    format!("{header}.{}.sig", engine.encode(payload.as_bytes()))
}

// =============================================================
// Successful decode
// =============================================================

#[test]
fn decodes_id_username_and_iat() {
    let token =
        token_with_payload(r#"{"id":"u-1","username":"amelia","iat":1629000000}"#);
    let claims = decode_claims(&token).unwrap();
    assert_eq!(claims.id, "u-1");
    assert_eq!(claims.username, "amelia");
    assert_eq!(claims.iat, Some(1_629_000_000));
}

#[test]
fn iat_is_optional() {
    let token = token_with_payload(r#"{"id":"u-1","username":"amelia"}"#);
    let claims = decode_claims(&token).unwrap();
    assert_eq!(claims.iat, None);
}

#[test]
fn unknown_payload_fields_are_ignored() {
    let token = token_with_payload(
        r#"{"id":"u-1","username":"amelia","role":"admin","exp":99}"#,
    );
    assert!(decode_claims(&token).is_some());
}

// =============================================================
// Malformed input resolves to None
// =============================================================

#[test]
fn rejects_token_without_three_segments() {
    assert!(decode_claims("not-a-jwt").is_none());
    assert!(decode_claims("header.payload").is_none());
    assert!(decode_claims("").is_none());
}

#[test]
fn rejects_payload_that_is_not_base64() {
    assert!(decode_claims("h.!!!not base64!!!.s").is_none());
}

#[test]
fn rejects_payload_that_is_not_json() {
    let engine = &base64::engine::general_purpose::URL_SAFE_NO_PAD;
    let token = format!("h.{}.s", engine.encode(b"plain text"));
    assert!(decode_claims(&token).is_none());
}

#[test]
fn rejects_payload_missing_required_fields() {
    let token = token_with_payload(r#"{"id":"u-1"}"#);
    assert!(decode_claims(&token).is_none());
}
