use crate::auth::cookies::{expired_session_cookie, session_cookie, session_token};
use crate::domain::selection::{media_types, titles_for};
use crate::domain::Selection;
use crate::errors::ServerError;
use crate::loader::Dataset;
use crate::responses::{asset_response, html_response, redirect_response, ResultResp};
use crate::state::AppState;
use crate::templates::components::{notice, NoticeKind};
use crate::templates::pages::dashboard::EMPTY_FEED_MESSAGE;
use crate::templates::pages::{
    dashboard_page, empty_feed_page, locked_dashboard_page, tab_panel, DashboardVm, TabBody,
};
use crate::views::{
    description_view, historical_revenue_view, popularity_view, providers_view,
    total_revenue_view, Tab,
};
use astra::Request;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::io::Read;
use tracing::{debug, info};
use url::form_urlencoded;

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    debug!(%method, path = %path, "request");

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => dashboard(&req, state),
        ("POST", "/session") => start_session(req, state),
        ("POST", "/session/end") => end_session(&req, state),
        ("GET", p) if p.starts_with("/tabs/") => {
            let tab = Tab::from_slug(&p["/tabs/".len()..]).ok_or(ServerError::NotFound)?;
            tab_partial(&req, state, tab)
        }
        ("GET", p) if p.starts_with("/images/") => {
            asset_response(&state.config.assets_dir, p.trim_start_matches('/'))
        }
        _ => Err(ServerError::NotFound),
    }
}

/// Query parameters shared by the full page and the tab partials.
#[derive(Debug, Default, PartialEq)]
struct DashboardQuery {
    media_type: Option<String>,
    title: Option<String>,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
}

impl DashboardQuery {
    fn from_request(req: &Request) -> Result<Self, ServerError> {
        let mut query = Self::default();
        let Some(raw) = req.uri().query() else {
            return Ok(query);
        };

        for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
            match key.as_ref() {
                "type" => query.media_type = Some(value.into_owned()),
                "title" => query.title = Some(value.into_owned()),
                "from" => query.from = parse_date("from", &value)?,
                "to" => query.to = parse_date("to", &value)?,
                _ => {}
            }
        }

        Ok(query)
    }

    fn resolve(&self, dataset: &Dataset) -> Option<Selection> {
        Selection::resolve(
            &dataset.trending,
            self.media_type.as_deref(),
            self.title.as_deref(),
        )
    }
}

// Empty date inputs mean "no bound".
fn parse_date(name: &str, value: &str) -> Result<Option<NaiveDate>, ServerError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| ServerError::BadRequest(format!("invalid `{name}` date: {value}")))
}

fn read_form(req: &mut Request) -> Result<HashMap<String, String>, ServerError> {
    let mut body = Vec::new();
    req.body_mut()
        .reader()
        .read_to_end(&mut body)
        .map_err(|_| ServerError::BadRequest("unreadable request body".into()))?;

    Ok(form_urlencoded::parse(&body).into_owned().collect())
}

fn credential(req: &Request, state: &AppState) -> Option<String> {
    session_token(req).and_then(|token| state.sessions.credential(&token))
}

fn dashboard(req: &Request, state: &AppState) -> ResultResp {
    let query = DashboardQuery::from_request(req)?;

    let Some(api_key) = credential(req, state) else {
        return html_response(locked_dashboard_page());
    };

    let dataset = state.cache.get_or_load(&api_key)?;
    let Some(selection) = query.resolve(&dataset) else {
        return html_response(empty_feed_page());
    };

    let tabs = Tab::ALL
        .into_iter()
        .map(|tab| (tab, compute_tab(tab, &dataset, &selection, &query, state)))
        .collect();

    let vm = DashboardVm {
        media_types: media_types(&dataset.trending),
        titles: titles_for(&dataset.trending, selection.media_type),
        selection: &selection,
        tabs,
    };

    html_response(dashboard_page(&vm))
}

fn tab_partial(req: &Request, state: &AppState, tab: Tab) -> ResultResp {
    let query = DashboardQuery::from_request(req)?;

    let Some(api_key) = credential(req, state) else {
        return html_response(tab_panel(tab, None, &TabBody::Locked));
    };

    let dataset = state.cache.get_or_load(&api_key)?;
    let Some(selection) = query.resolve(&dataset) else {
        return html_response(notice(NoticeKind::Info, EMPTY_FEED_MESSAGE));
    };

    let body = compute_tab(tab, &dataset, &selection, &query, state);
    html_response(tab_panel(tab, Some(&selection), &body))
}

fn compute_tab(
    tab: Tab,
    dataset: &Dataset,
    selection: &Selection,
    query: &DashboardQuery,
    state: &AppState,
) -> TabBody {
    let has_revenue = selection.media_type.has_revenue_data();

    match tab {
        Tab::Description => TabBody::Description(description_view(&selection.item, &state.catalog)),
        Tab::Popularity => {
            let rows: Vec<(&str, f64)> = dataset
                .items_of(selection.media_type)
                .map(|item| (item.common_name.as_str(), item.popularity))
                .collect();
            TabBody::Popularity(popularity_view(&rows, &selection.title))
        }
        Tab::HistoricalRevenue | Tab::TotalRevenue if !has_revenue => TabBody::NoRevenueForTv,
        Tab::HistoricalRevenue => TabBody::HistoricalRevenue(historical_revenue_view(
            &dataset.revenue,
            &selection.title,
            query.from,
            query.to,
        )),
        Tab::TotalRevenue => {
            TabBody::TotalRevenue(total_revenue_view(&dataset.revenue, &selection.title))
        }
        Tab::Providers => TabBody::Providers(providers_view(
            &dataset.providers,
            selection.item.id,
            &state.catalog,
            &state.config.watch_region,
        )),
    }
}

fn start_session(mut req: Request, state: &AppState) -> ResultResp {
    let form = read_form(&mut req)?;
    let api_key = form
        .get("api_key")
        .map(|key| key.trim())
        .filter(|key| !key.is_empty())
        .ok_or_else(|| ServerError::BadRequest("an API key is required".into()))?;

    let token = state.sessions.create_session(api_key);
    info!("session started");

    redirect_response("/", Some(session_cookie(&token)))
}

fn end_session(req: &Request, state: &AppState) -> ResultResp {
    if let Some(token) = session_token(req) {
        state.sessions.end_session(&token);
        info!("session ended");
    }

    redirect_response("/", Some(expired_session_cookie()))
}
