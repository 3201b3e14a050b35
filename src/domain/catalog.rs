// src/domain/catalog.rs

use serde::Deserialize;
use std::collections::{HashMap, HashSet};

/// Lookup tables the views consult instead of inline branching.
/// Loadable from JSON so new providers or overrides need no code change.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Catalog {
    /// Provider name (as returned by the API) -> icon asset path.
    pub provider_icons: HashMap<String, String>,
    /// Titles flagged as adult content regardless of the API flag.
    pub adult_titles: HashSet<String>,
    pub adult_image: String,
}

impl Default for Catalog {
    fn default() -> Self {
        let provider_icons = [
            ("Apple TV", "images/apple_tv_icon.jpg"),
            ("Amazon Video", "images/amznprime_icon.png"),
            ("YouTube", "images/youtube_icon.png"),
            ("Google Play Movies", "images/google_icon.png"),
            ("Netflix", "images/netflix_icon.png"),
            ("HBO Max", "images/hbo_icon.png"),
        ]
        .into_iter()
        .map(|(name, asset)| (name.to_string(), asset.to_string()))
        .collect();

        Self {
            provider_icons,
            adult_titles: HashSet::from(["Oppenheimer".to_string()]),
            adult_image: "images/adult.jpg".to_string(),
        }
    }
}

impl Catalog {
    pub fn icon_for(&self, provider_name: &str) -> Option<&str> {
        self.provider_icons.get(provider_name).map(String::as_str)
    }

    pub fn is_adult_override(&self, title: &str) -> bool {
        self.adult_titles.contains(title)
    }
}
