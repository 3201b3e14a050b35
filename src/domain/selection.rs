// src/domain/selection.rs

use crate::domain::media::{MediaType, TrendingItem};

/// Distinct media types in the order the feed first mentions them.
pub fn media_types(items: &[TrendingItem]) -> Vec<MediaType> {
    let mut types = Vec::new();
    for item in items {
        if !types.contains(&item.media_type) {
            types.push(item.media_type);
        }
    }
    types
}

/// Distinct display names of one media type, first-seen order.
pub fn titles_for(items: &[TrendingItem], media_type: MediaType) -> Vec<&str> {
    let mut titles: Vec<&str> = Vec::new();
    for item in items.iter().filter(|i| i.media_type == media_type) {
        if !titles.contains(&item.common_name.as_str()) {
            titles.push(&item.common_name);
        }
    }
    titles
}

/// What the user is looking at: a media type and one title of that type.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub media_type: MediaType,
    pub title: String,
    /// First feed row of the chosen type carrying the selected title.
    pub item: TrendingItem,
}

impl Selection {
    /// Resolves the requested type and title against the loaded feed.
    /// Unknown or missing values fall back to the first option offered.
    /// `None` only when the feed is empty.
    pub fn resolve(
        items: &[TrendingItem],
        requested_type: Option<&str>,
        requested_title: Option<&str>,
    ) -> Option<Self> {
        let types = media_types(items);
        let media_type = requested_type
            .and_then(|t| t.parse::<MediaType>().ok())
            .filter(|t| types.contains(t))
            .or_else(|| types.first().copied())?;

        let item = requested_title
            .and_then(|title| {
                items
                    .iter()
                    .find(|i| i.media_type == media_type && i.common_name == title)
            })
            .or_else(|| items.iter().find(|i| i.media_type == media_type))?;

        Some(Self {
            media_type,
            title: item.common_name.clone(),
            item: item.clone(),
        })
    }
}
