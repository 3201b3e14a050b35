use crate::errors::ServerError;
use crate::router::handle;
use crate::templates::pages::tabs::LOCKED_MESSAGE;
use crate::tests::utils::{body_string, get, post_form, test_state};
use astra::Response;

fn set_cookie(resp: &Response) -> String {
    resp.headers()
        .get("Set-Cookie")
        .expect("Set-Cookie header")
        .to_str()
        .unwrap()
        .to_string()
}

fn token_from(cookie: &str) -> String {
    cookie
        .strip_prefix("session=")
        .and_then(|rest| rest.split(';').next())
        .unwrap()
        .to_string()
}

#[test]
fn posting_key_starts_session() {
    let state = test_state();

    let resp = handle(post_form("/session", "api_key=abc123", None), &state).unwrap();
    assert_eq!(resp.status(), 302);
    assert_eq!(resp.headers()["Location"], "/");

    let cookie = set_cookie(&resp);
    assert!(cookie.contains("HttpOnly"));
    assert!(!cookie.contains("abc123"));

    let token = token_from(&cookie);
    assert_eq!(state.sessions.credential(&token).as_deref(), Some("abc123"));

    let body = body_string(handle(get("/", Some(&token)), &state).unwrap());
    assert!(!body.contains(LOCKED_MESSAGE));
}

#[test]
fn blank_key_is_rejected() {
    let state = test_state();

    let err = handle(post_form("/session", "api_key=+++", None), &state).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));

    let err = handle(post_form("/session", "", None), &state).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));
}

#[test]
fn ending_session_forgets_key() {
    let state = test_state();
    let token = state.sessions.create_session("abc123");

    let resp = handle(post_form("/session/end", "", Some(&token)), &state).unwrap();
    assert_eq!(resp.status(), 302);
    assert!(set_cookie(&resp).contains("Max-Age=0"));

    assert_eq!(state.sessions.credential(&token), None);
    let body = body_string(handle(get("/", Some(&token)), &state).unwrap());
    assert_eq!(body.matches(LOCKED_MESSAGE).count(), 5);
}

#[test]
fn unknown_token_is_locked() {
    let state = test_state();

    let body = body_string(handle(get("/", Some("forged")), &state).unwrap());
    assert!(body.contains(LOCKED_MESSAGE));
}
