use crate::errors::ServerError;
use crate::responses::error_response;
use crate::router::handle;
use crate::templates::pages::dashboard::EMPTY_FEED_MESSAGE;
use crate::templates::pages::tabs::{LOCKED_MESSAGE, NO_TV_REVENUE_MESSAGE};
use crate::loader::Dataset;
use crate::tests::utils::{body_string, failing_state, get, state_with, test_state};

#[test]
fn dashboard_without_key_is_locked() {
    let state = test_state();

    let resp = handle(get("/", None), &state).expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("<!DOCTYPE html>"));
    assert!(body.contains(r#"type="password""#));
    assert_eq!(body.matches(LOCKED_MESSAGE).count(), 5);
    assert!(!body.contains("Forget API key"));
}

#[test]
fn dashboard_with_session_shows_first_movie() {
    let state = test_state();
    let token = state.sessions.create_session("valid-key");

    let resp = handle(get("/", Some(&token)), &state).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Interactive Movie Data Dashboard"));
    assert!(body.contains("Forget API key"));
    assert!(body.contains("Overview of Wonka."));
    assert!(body.contains(r#"<option value="Wonka" selected>"#));
    // tv titles are not offered while movies are selected
    assert!(!body.contains(r#"<option value="Shogun""#));
    assert!(body.contains("Available providers in PL"));
    assert!(body.contains("/images/apple_tv_icon.jpg"));
    assert!(body.contains("Selected Movie"));
    assert!(!body.contains(LOCKED_MESSAGE));
}

#[test]
fn tv_selection_hides_revenue_tabs() {
    let state = test_state();
    let token = state.sessions.create_session("valid-key");

    let body = body_string(handle(get("/?type=tv", Some(&token)), &state).unwrap());

    assert!(body.contains("Overview of Shogun."));
    assert_eq!(body.matches(NO_TV_REVENUE_MESSAGE).count(), 2);
}

#[test]
fn adult_override_shows_warning() {
    let state = test_state();
    let token = state.sessions.create_session("valid-key");

    let body = body_string(handle(get("/?type=movie&title=Oppenheimer", Some(&token)), &state).unwrap());

    assert!(body.contains("This movie is for adults only!"));
    assert!(body.contains("/images/adult.jpg"));
}

#[test]
fn unknown_title_falls_back_to_first() {
    let state = test_state();
    let token = state.sessions.create_session("valid-key");

    let body = body_string(handle(get("/?type=movie&title=Nope", Some(&token)), &state).unwrap());

    assert!(body.contains(r#"<option value="Wonka" selected>"#));
}

#[test]
fn load_failure_is_bad_gateway() {
    let state = failing_state();
    let token = state.sessions.create_session("rejected-key");

    let err = handle(get("/", Some(&token)), &state).unwrap_err();
    assert!(matches!(err, ServerError::Load(_)));

    let resp = error_response(err);
    assert_eq!(resp.status(), 502);

    let body = body_string(resp);
    assert!(body.contains("Invalid API key"));
    assert!(!body.contains("rejected-key"));
}

#[test]
fn empty_feed_shows_notice() {
    let state = state_with(Dataset::default(), false);
    let token = state.sessions.create_session("valid-key");

    let body = body_string(handle(get("/", Some(&token)), &state).unwrap());

    assert!(body.contains(EMPTY_FEED_MESSAGE));
    assert!(!body.contains(r#"class="tab-panel""#));
}

#[test]
fn malformed_date_is_rejected() {
    let state = test_state();
    let token = state.sessions.create_session("valid-key");

    let err = handle(get("/?from=yesterday", Some(&token)), &state).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));
    assert_eq!(err.status(), 400);
}

#[test]
fn unknown_route_is_not_found() {
    let state = test_state();

    let err = handle(get("/admin", None), &state).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));

    let resp = error_response(err);
    assert_eq!(resp.status(), 404);
}
