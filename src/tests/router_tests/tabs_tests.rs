use crate::errors::ServerError;
use crate::router::handle;
use crate::templates::pages::tabs::{LOCKED_MESSAGE, NO_TV_REVENUE_MESSAGE};
use crate::tests::utils::{body_string, get, test_state};
use crate::views::HistoricalView;

fn partial(uri: &str) -> String {
    let state = test_state();
    let token = state.sessions.create_session("valid-key");

    let resp = handle(get(uri, Some(&token)), &state).expect("Failed to handle request");
    assert_eq!(resp.status(), 200);
    body_string(resp)
}

#[test]
fn tab_partial_is_a_fragment() {
    let body = partial("/tabs/popularity?type=movie&title=Dune");

    assert!(!body.contains("<!DOCTYPE html>"));
    assert!(!body.contains("<html"));
    assert!(body.contains(r#"id="tab-popularity""#));
    assert!(body.contains("Popularity of <strong>Dune</strong>: 100.0"));
    assert_eq!(body.matches("Selected Movie").count(), 1);
}

#[test]
fn historical_range_filters_days() {
    let body = partial("/tabs/historical-revenue?type=movie&title=Wonka&from=2023-12-16&to=2023-12-17");

    assert!(body.contains(r#"hx-get="/tabs/historical-revenue""#));
    assert!(body.contains("$25,000,000"));
    assert!(body.contains("$12,000,000"));
    assert!(!body.contains("$39,000,000"));
    assert!(!body.contains(r#"<span class="bar-label">2023-12-15</span>"#));
}

#[test]
fn historical_reversed_range_is_empty() {
    let body = partial("/tabs/historical-revenue?title=Wonka&from=2023-12-17&to=2023-12-15");

    assert!(body.contains(HistoricalView::EMPTY_RANGE_MESSAGE));
    assert!(body.contains("notice-warning"));
    assert!(!body.contains("notice-error"));
}

#[test]
fn historical_without_release() {
    let body = partial("/tabs/historical-revenue?title=Oppenheimer");

    assert!(body.contains(&HistoricalView::no_release_message("Oppenheimer")));
    assert!(body.contains("notice-error"));
    assert!(!body.contains("notice-warning"));
}

#[test]
fn total_revenue_for_tv_is_unavailable() {
    let body = partial("/tabs/total-revenue?type=tv");

    assert!(body.contains(NO_TV_REVENUE_MESSAGE));
}

#[test]
fn total_revenue_ranks_selected_title() {
    let body = partial("/tabs/total-revenue?type=movie&title=Dune");

    assert!(body.contains("#2"));
    assert!(body.contains("$1,000,000"));
    assert!(body.contains("$76,000,000"));
}

#[test]
fn providers_partial_without_offers() {
    let body = partial("/tabs/providers?type=movie&title=Dune");

    assert!(body.contains("Available providers in PL"));
    assert!(!body.contains("<img"));
}

#[test]
fn tab_partial_without_key_is_locked() {
    let state = test_state();

    let body = body_string(handle(get("/tabs/description", None), &state).unwrap());
    assert!(body.contains(LOCKED_MESSAGE));
    assert!(body.contains(r#"id="tab-description""#));
}

#[test]
fn unknown_tab_is_not_found() {
    let state = test_state();

    let err = handle(get("/tabs/charts", None), &state).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
}
