// src/config.rs
use crate::domain::Catalog;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_REVENUE_DATASET_URL: &str =
    "https://github.com/tjwaterman99/boxofficemojo-scraper/releases/latest/download/revenues_per_day.csv.gz";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
    #[error("failed to read catalog {}: {source}", .path.display())]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse catalog {}: {source}", .path.display())]
    CatalogParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone)]
pub struct Config {
    /// DASHBOARD_ADDR
    pub addr: SocketAddr,
    /// DASHBOARD_WORKERS
    pub workers: usize,
    /// TMDB_BASE_URL
    pub tmdb_base_url: String,
    /// REVENUE_DATASET_URL
    pub revenue_dataset_url: String,
    /// WATCH_REGION: the one region whose provider offers are kept.
    pub watch_region: String,
    /// TRENDING_PAGE_CAP
    pub trending_page_cap: u32,
    /// HTTP_TIMEOUT_SECS
    pub http_timeout: Option<Duration>,
    /// DASHBOARD_CATALOG: JSON file replacing the built-in lookup tables.
    pub catalog_path: Option<PathBuf>,
    /// DASHBOARD_ASSETS: directory holding the `images/` referenced by the catalog.
    pub assets_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            workers: 4,
            tmdb_base_url: DEFAULT_TMDB_BASE_URL.to_string(),
            revenue_dataset_url: DEFAULT_REVENUE_DATASET_URL.to_string(),
            watch_region: "PL".to_string(),
            trending_page_cap: 1,
            http_timeout: None,
            catalog_path: None,
            assets_dir: PathBuf::from("assets"),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset or blank keys keep defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut cfg = Self::default();

        if let Some(v) = get("DASHBOARD_ADDR") {
            cfg.addr = parse("DASHBOARD_ADDR", &v)?;
        }
        if let Some(v) = get("DASHBOARD_WORKERS") {
            cfg.workers = parse("DASHBOARD_WORKERS", &v)?;
            if cfg.workers == 0 {
                return Err(invalid("DASHBOARD_WORKERS", &v));
            }
        }
        if let Some(v) = get("TMDB_BASE_URL") {
            cfg.tmdb_base_url = parse_url("TMDB_BASE_URL", &v)?;
        }
        if let Some(v) = get("REVENUE_DATASET_URL") {
            cfg.revenue_dataset_url = parse_url("REVENUE_DATASET_URL", &v)?;
        }
        if let Some(v) = get("WATCH_REGION") {
            cfg.watch_region = v.trim().to_uppercase();
        }
        if let Some(v) = get("TRENDING_PAGE_CAP") {
            cfg.trending_page_cap = parse("TRENDING_PAGE_CAP", &v)?;
            if cfg.trending_page_cap == 0 {
                return Err(invalid("TRENDING_PAGE_CAP", &v));
            }
        }
        if let Some(v) = get("HTTP_TIMEOUT_SECS") {
            let secs: u64 = parse("HTTP_TIMEOUT_SECS", &v)?;
            cfg.http_timeout = Some(Duration::from_secs(secs));
        }
        if let Some(v) = get("DASHBOARD_CATALOG") {
            cfg.catalog_path = Some(PathBuf::from(v));
        }
        if let Some(v) = get("DASHBOARD_ASSETS") {
            cfg.assets_dir = PathBuf::from(v);
        }

        Ok(cfg)
    }

    /// The configured catalog file, or the built-in tables.
    pub fn load_catalog(&self) -> Result<Catalog, ConfigError> {
        let Some(path) = &self.catalog_path else {
            return Ok(Catalog::default());
        };

        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::CatalogRead {
            path: path.clone(),
            source,
        })?;

        serde_json::from_str(&raw).map_err(|source| ConfigError::CatalogParse {
            path: path.clone(),
            source,
        })
    }
}

fn invalid(key: &'static str, value: &str) -> ConfigError {
    ConfigError::Invalid {
        key,
        value: value.to_string(),
    }
}

fn parse<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| invalid(key, value))
}

fn parse_url(key: &'static str, value: &str) -> Result<String, ConfigError> {
    let url = url::Url::parse(value.trim()).map_err(|_| invalid(key, value))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(key, value));
    }
    Ok(value.trim().to_string())
}
