// src/domain/media.rs

use crate::sources::RawTrendingItem;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaType {
    Movie,
    Tv,
}

impl MediaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Movie => "movie",
            MediaType::Tv => "tv",
        }
    }

    /// Only movies are covered by the box-office dataset.
    pub fn has_revenue_data(&self) -> bool {
        matches!(self, MediaType::Movie)
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "movie" => Ok(MediaType::Movie),
            "tv" => Ok(MediaType::Tv),
            other => Err(format!("unsupported media type: {other}")),
        }
    }
}

/// A movie or TV show from the weekly trending feed, normalized so both
/// schema variants expose the same display name.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendingItem {
    pub id: i64,
    pub media_type: MediaType,
    pub common_name: String,
    pub overview: String,
    pub adult: bool,
    pub vote_average: f64,
    pub vote_count: i64,
    pub popularity: f64,
}

/// Movies carry `title`, TV shows carry `name`. `name` wins when present.
pub fn common_name(name: Option<&str>, title: Option<&str>) -> Option<String> {
    name.or(title).map(str::to_string)
}

impl TrendingItem {
    /// Flattens a raw feed row. Rows of other media types (the feed also
    /// returns people) or rows without any display name are rejected.
    pub fn from_raw(raw: &RawTrendingItem) -> Result<Self, String> {
        let media_type = raw
            .media_type
            .as_deref()
            .ok_or("Missing media type")?
            .parse::<MediaType>()?;

        let common_name = common_name(raw.name.as_deref(), raw.title.as_deref())
            .ok_or("Missing both name and title")?;

        Ok(Self {
            id: raw.id,
            media_type,
            common_name,
            overview: raw.overview.clone().unwrap_or_default(),
            adult: raw.adult.unwrap_or(false),
            vote_average: raw.vote_average.unwrap_or(0.0),
            vote_count: raw.vote_count.unwrap_or(0),
            popularity: raw.popularity.unwrap_or(0.0),
        })
    }
}
