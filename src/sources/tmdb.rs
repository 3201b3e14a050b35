// tmdb.rs
use crate::domain::media::MediaType;
use crate::domain::providers::ProviderInfo;
use crate::sources::models::{Page, RawTrendingItem, WatchProvidersResponse};
use crate::sources::SourceError;
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

pub const TRENDING_ENDPOINT: &str = "trending/all/week";

/// Blocking client for the movie metadata API. The credential is passed per
/// call so one client serves every session.
pub struct TmdbClient {
    client: Client,
    base_url: String,
}

impl TmdbClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), endpoint)
    }

    fn get_json<T: DeserializeOwned>(
        &self,
        api_key: &str,
        endpoint: &str,
        page: u32,
    ) -> Result<T, SourceError> {
        let page = page.to_string();
        let resp = self
            .client
            .get(self.url(endpoint))
            .query(&[("api_key", api_key), ("page", page.as_str())])
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().unwrap_or_default();
            return Err(SourceError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(resp.json()?)
    }

    /// Fetches page 1, then pages `2..=min(total_pages, max_pages)`, and
    /// concatenates their `results`.
    pub fn fetch_all_pages<T: DeserializeOwned>(
        &self,
        api_key: &str,
        endpoint: &str,
        max_pages: u32,
    ) -> Result<Vec<T>, SourceError> {
        let first: Page<T> = self.get_json(api_key, endpoint, 1)?;
        let total_pages = first.total_pages.unwrap_or(1).min(max_pages);
        let mut results = first.results;

        for page in 2..=total_pages {
            debug!(endpoint, page, "fetching next page");
            let next: Page<T> = self.get_json(api_key, endpoint, page)?;
            results.extend(next.results);
        }

        Ok(results)
    }

    pub fn trending(&self, api_key: &str, max_pages: u32) -> Result<Vec<RawTrendingItem>, SourceError> {
        self.fetch_all_pages(api_key, TRENDING_ENDPOINT, max_pages)
    }

    /// Provider listing of one title in `region`; `Ok(None)` when the title
    /// is not offered there.
    pub fn watch_providers(
        &self,
        api_key: &str,
        media_type: MediaType,
        id: i64,
        region: &str,
    ) -> Result<Option<ProviderInfo>, SourceError> {
        let endpoint = format!("{media_type}/{id}/watch/providers");
        let mut resp: WatchProvidersResponse = self.get_json(api_key, &endpoint, 1)?;
        Ok(resp.results.remove(region))
    }
}
