use crate::domain::providers::ProviderInfo;
use serde::Deserialize;
use std::collections::HashMap;

// trending/all/week
//  ├── page
//  ├── total_pages
//  └── results[]
//       ├── id
//       ├── media_type   (movie | tv | person)
//       ├── title        (movie)
//       ├── name         (tv, person)
//       ├── overview
//       ├── adult
//       ├── vote_average
//       ├── vote_count
//       └── popularity

#[derive(Debug, Deserialize)]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
    pub total_pages: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawTrendingItem {
    pub id: i64,
    pub media_type: Option<String>,
    pub name: Option<String>,
    pub title: Option<String>,
    pub overview: Option<String>,
    pub adult: Option<bool>,
    pub vote_average: Option<f64>,
    pub vote_count: Option<i64>,
    pub popularity: Option<f64>,
}

// {movie|tv}/{id}/watch/providers
//  ├── id
//  └── results
//       └── <REGION>
//            ├── link
//            ├── rent[]      { provider_name, ... }
//            ├── flatrate[]
//            └── buy[]

#[derive(Debug, Deserialize)]
pub struct WatchProvidersResponse {
    #[serde(default)]
    pub results: HashMap<String, ProviderInfo>,
}
