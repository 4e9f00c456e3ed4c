use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};

use super::*;

fn forge(role: &str) -> String {
    let payload =
        URL_SAFE_NO_PAD.encode(serde_json::json!({ "role": role, "userId": "u1" }).to_string());
    format!("h.{payload}.s")
}

#[test]
fn nav_role_hidden_while_session_hydrates() {
    let state = SessionState { token: Some(forge("admin")), loading: true };
    assert_eq!(nav_role(&state), None);
}

#[test]
fn nav_role_hidden_when_signed_out() {
    let state = SessionState { token: None, loading: false };
    assert_eq!(nav_role(&state), None);
}

#[test]
fn nav_role_hidden_for_undecodable_token() {
    let state = SessionState { token: Some("garbage".to_owned()), loading: false };
    assert_eq!(nav_role(&state), None);
}

#[test]
fn nav_role_hidden_for_empty_role_claim() {
    let state = SessionState { token: Some(forge("")), loading: false };
    assert_eq!(nav_role(&state), None);
}

#[test]
fn nav_role_exposes_decoded_role() {
    let state = SessionState { token: Some(forge("student")), loading: false };
    assert_eq!(nav_role(&state).as_deref(), Some("student"));
}
