mod cache;

pub use cache::DataCache;

use crate::config::Config;
use crate::domain::{MediaType, ProviderMap, RevenueRecord, TrendingItem};
use crate::sources::{build_http_client, RevenueClient, SourceError, TmdbClient};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Everything the dashboard renders from, loaded once per credential.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    /// Sorted by date, oldest first.
    pub revenue: Vec<RevenueRecord>,
    pub trending: Vec<TrendingItem>,
    pub providers: ProviderMap,
}

impl Dataset {
    pub fn items_of(&self, media_type: MediaType) -> impl Iterator<Item = &TrendingItem> {
        self.trending
            .iter()
            .filter(move |item| item.media_type == media_type)
    }
}

/// Where datasets come from. The HTTP implementation talks to the real
/// upstreams; tests plug in fixed data.
pub trait DataSource: Send + Sync {
    fn load(&self, api_key: &str) -> Result<Dataset, SourceError>;
}

pub struct HttpDataSource {
    tmdb: TmdbClient,
    revenue: RevenueClient,
    region: String,
    page_cap: u32,
}

impl HttpDataSource {
    pub fn new(config: &Config) -> Result<Self, SourceError> {
        let client = build_http_client(config.http_timeout)?;

        Ok(Self {
            tmdb: TmdbClient::new(client.clone(), config.tmdb_base_url.clone()),
            revenue: RevenueClient::new(client, config.revenue_dataset_url.clone()),
            region: config.watch_region.clone(),
            page_cap: config.trending_page_cap,
        })
    }

    fn fetch_trending(&self, api_key: &str) -> Result<Vec<TrendingItem>, SourceError> {
        let raw = self.tmdb.trending(api_key, self.page_cap)?;
        let fetched = raw.len();

        let items: Vec<TrendingItem> = raw
            .iter()
            .filter_map(|row| match TrendingItem::from_raw(row) {
                Ok(item) => Some(item),
                Err(reason) => {
                    debug!(id = row.id, %reason, "dropping trending row");
                    None
                }
            })
            .collect();

        if items.len() < fetched {
            info!(fetched, kept = items.len(), "filtered trending feed");
        }
        Ok(items)
    }

    /// One request per item, serially. A failed lookup only drops that item.
    fn fetch_providers(&self, api_key: &str, items: &[TrendingItem]) -> ProviderMap {
        let mut providers = ProviderMap::new();

        for item in items {
            match self
                .tmdb
                .watch_providers(api_key, item.media_type, item.id, &self.region)
            {
                Ok(Some(info)) => {
                    providers.insert(item.id, info);
                }
                Ok(None) => {}
                Err(e) => debug!(id = item.id, error = %e, "provider lookup failed"),
            }
        }

        providers
    }
}

impl DataSource for HttpDataSource {
    fn load(&self, api_key: &str) -> Result<Dataset, SourceError> {
        let started = Instant::now();

        // trending first: a rejected key fails before the large download
        let trending = self.fetch_trending(api_key)?;
        let revenue = self.revenue.fetch()?;
        let providers = self.fetch_providers(api_key, &trending);

        if providers.is_empty() && !trending.is_empty() {
            warn!(region = %self.region, "no provider data for any trending item");
        }

        info!(
            revenue_rows = revenue.len(),
            trending_items = trending.len(),
            provider_entries = providers.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "dataset loaded"
        );

        Ok(Dataset {
            revenue,
            trending,
            providers,
        })
    }
}
