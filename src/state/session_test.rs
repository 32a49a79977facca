use super::*;
use base64::Engine;

fn make_token(id: &str, username: &str) -> String {
    let engine = &base64::engine::general_purpose::URL_SAFE_NO_PAD;
    let payload = format!(r#"{{"id":"{id}","username":"{username}","iat":1629000000}}"#);
    format!("h.{}.s", engine.encode(payload.as_bytes()))
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_has_no_session_and_is_loading() {
    let state = SessionState::default();
    assert!(state.token.is_none());
    assert!(state.user.is_none());
    assert!(state.loading);
}

// =============================================================
// Hydration
// =============================================================

#[test]
fn hydrate_with_no_stored_token_resolves_to_logged_out() {
    let mut state = SessionState::default();
    state.hydrate(None);
    assert!(state.token.is_none());
    assert!(state.user.is_none());
    assert!(!state.loading);
}

#[test]
fn hydrate_decodes_stored_token() {
    let token = make_token("u-1", "amelia");
    let mut state = SessionState::default();
    state.hydrate(Some(&token));
    assert_eq!(state.token.as_deref(), Some(token.as_str()));
    let user = state.user.unwrap();
    assert_eq!(user.id, "u-1");
    assert_eq!(user.username, "amelia");
    assert!(!state.loading);
}

#[test]
fn hydrate_is_idempotent_with_unchanged_storage() {
    let token = make_token("u-1", "amelia");
    let mut state = SessionState::default();
    state.hydrate(Some(&token));
    let first = state.clone();

    state.hydrate(Some(&token));
    assert_eq!(state.token, first.token);
    assert_eq!(state.user, first.user);
    assert!(!state.loading);
}

#[test]
fn hydrate_with_malformed_token_resolves_to_no_identity() {
    let mut state = SessionState::default();
    state.hydrate(Some("garbage"));
    assert!(state.user.is_none());
    assert!(!state.loading);
    // The raw token is kept; the server decides whether it is usable.
    assert_eq!(state.token.as_deref(), Some("garbage"));
}

#[test]
fn hydrate_does_not_overwrite_existing_identity() {
    let mut state = SessionState::default();
    state.apply_login(&make_token("u-1", "amelia"));

    state.hydrate(Some(&make_token("u-2", "brook")));
    assert_eq!(state.user.unwrap().id, "u-1");
}

// =============================================================
// Login / logout transitions
// =============================================================

#[test]
fn apply_login_sets_identity_from_token_payload() {
    let mut state = SessionState::default();
    state.apply_login(&make_token("u-9", "casey"));
    assert_eq!(state.user.as_ref().unwrap().username, "casey");
    assert!(state.token.is_some());
}

#[test]
fn clear_drops_token_and_identity() {
    let mut state = SessionState::default();
    state.apply_login(&make_token("u-9", "casey"));
    state.clear();
    assert!(state.token.is_none());
    assert!(state.user.is_none());
}
