use crate::config::Config;
use crate::domain::providers::{Provider, ProviderInfo};
use crate::domain::{Catalog, MediaType, ProviderMap, RevenueRecord, TrendingItem};
use crate::loader::{DataSource, Dataset};
use crate::sources::SourceError;
use crate::state::AppState;
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;

/// Serves one fixed dataset, or fails every load.
pub struct StaticSource {
    dataset: Dataset,
    fail: bool,
}

impl DataSource for StaticSource {
    fn load(&self, _api_key: &str) -> Result<Dataset, SourceError> {
        if self.fail {
            return Err(SourceError::Api {
                status: 401,
                message: "Invalid API key: You must be granted a valid key.".into(),
            });
        }
        Ok(self.dataset.clone())
    }
}

fn item(id: i64, media_type: MediaType, name: &str, popularity: f64) -> TrendingItem {
    TrendingItem {
        id,
        media_type,
        common_name: name.to_string(),
        overview: format!("Overview of {name}."),
        adult: false,
        vote_average: 7.5,
        vote_count: 1200,
        popularity,
    }
}

fn record(title: &str, date: &str, revenue: f64) -> RevenueRecord {
    RevenueRecord {
        title: title.to_string(),
        date: date.parse().unwrap(),
        revenue,
    }
}

pub fn sample_dataset() -> Dataset {
    let trending = vec![
        item(1, MediaType::Movie, "Wonka", 300.0),
        item(2, MediaType::Movie, "Oppenheimer", 250.0),
        item(3, MediaType::Tv, "Shogun", 500.0),
        item(4, MediaType::Movie, "Dune", 100.0),
    ];

    let revenue = vec![
        record("Wonka", "2023-12-15", 39_000_000.0),
        record("Dune", "2023-12-15", 1_000_000.0),
        record("Wonka", "2023-12-16", 25_000_000.0),
        record("Wonka", "2023-12-17", 12_000_000.0),
    ];

    let mut providers = ProviderMap::new();
    providers.insert(
        1,
        ProviderInfo {
            link: Some("https://www.themoviedb.org/movie/1/watch?locale=PL".into()),
            rent: Some(vec![Provider {
                provider_name: "Apple TV".into(),
            }]),
            flatrate: Some(vec![Provider {
                provider_name: "Netflix".into(),
            }]),
            buy: None,
        },
    );

    Dataset {
        revenue,
        trending,
        providers,
    }
}

pub fn test_state() -> AppState {
    state_with(sample_dataset(), false)
}

pub fn failing_state() -> AppState {
    state_with(Dataset::default(), true)
}

pub fn state_with(dataset: Dataset, fail: bool) -> AppState {
    AppState::new(
        Config::default(),
        Catalog::default(),
        Box::new(StaticSource { dataset, fail }),
    )
}

/// GET request, with a session cookie when `token` is given.
pub fn get(uri: &str, token: Option<&str>) -> Request {
    let mut builder = http::Request::builder().method(Method::GET).uri(uri);
    if let Some(token) = token {
        builder = builder.header("Cookie", format!("session={token}"));
    }
    builder.body(Body::empty()).unwrap()
}

pub fn post_form(uri: &str, form: &str, token: Option<&str>) -> Request {
    let mut builder = http::Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded");
    if let Some(token) = token {
        builder = builder.header("Cookie", format!("session={token}"));
    }
    builder.body(Body::from(form.as_bytes().to_vec())).unwrap()
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}
