use thiserror::Error;

/// Failures talking to the trending API or reading the revenue dataset.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("network error: {0}")]
    Network(reqwest::Error),
    #[error("upstream sent an unreadable response: {0}")]
    Decode(reqwest::Error),
    #[error("upstream returned HTTP {status}: {message}")]
    Api { status: u16, message: String },
    #[error("revenue dataset error: {0}")]
    Csv(#[from] csv::Error),
    #[error("revenue dataset has no `{0}` column")]
    MissingColumn(&'static str),
}

// Request URLs carry the api_key query parameter; keep them out of messages.
impl From<reqwest::Error> for SourceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            SourceError::Decode(err.without_url())
        } else {
            SourceError::Network(err.without_url())
        }
    }
}
