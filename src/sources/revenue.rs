// revenue.rs
use crate::domain::revenue::RevenueRecord;
use crate::sources::SourceError;
use flate2::read::GzDecoder;
use reqwest::blocking::Client;
use std::io::Read;
use tracing::{debug, info, warn};

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];
const REQUIRED_COLUMNS: [&str; 3] = ["title", "date", "revenue"];

/// Downloads the historical box-office table (daily revenue per title).
pub struct RevenueClient {
    client: Client,
    url: String,
}

impl RevenueClient {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn fetch(&self) -> Result<Vec<RevenueRecord>, SourceError> {
        let resp = self.client.get(&self.url).send()?;

        let status = resp.status();
        if !status.is_success() {
            return Err(SourceError::Api {
                status: status.as_u16(),
                message: format!("revenue dataset download failed: {}", self.url),
            });
        }

        let bytes = resp.bytes()?;
        info!(bytes = bytes.len(), "revenue dataset downloaded");
        parse_revenue_csv(&bytes)
    }
}

/// Parses the dataset, gunzipping first when the payload is compressed.
/// Records come back sorted by date, oldest first.
pub fn parse_revenue_csv(bytes: &[u8]) -> Result<Vec<RevenueRecord>, SourceError> {
    if bytes.starts_with(&GZIP_MAGIC) {
        read_records(GzDecoder::new(bytes))
    } else {
        read_records(bytes)
    }
}

fn read_records<R: Read>(reader: R) -> Result<Vec<RevenueRecord>, SourceError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(SourceError::MissingColumn(column));
        }
    }

    let mut records = Vec::new();
    let mut skipped = 0usize;

    for row in rdr.deserialize::<RevenueRecord>() {
        match row {
            Ok(record) => records.push(record),
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => {
                skipped += 1;
                debug!(error = %e, "skipping revenue row");
            }
        }
    }

    if skipped > 0 {
        warn!(skipped, kept = records.len(), "skipped malformed revenue rows");
    }

    // stable: same-day rows keep file order
    records.sort_by_key(|r| r.date);
    Ok(records)
}
