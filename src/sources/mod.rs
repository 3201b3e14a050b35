mod models;
mod revenue;
mod source_error;
mod tmdb;

pub use models::RawTrendingItem;
pub use revenue::RevenueClient;
pub use source_error::SourceError;
pub use tmdb::TmdbClient;

use reqwest::blocking::Client;
use std::time::Duration;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Shared HTTP client for both upstreams. Without a timeout the library
/// default applies.
pub fn build_http_client(timeout: Option<Duration>) -> Result<Client, SourceError> {
    let mut builder = Client::builder().user_agent(USER_AGENT);
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    Ok(builder.build()?)
}
