// src/domain/providers.rs

use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderCategory {
    Rent,
    Flatrate,
    Buy,
}

impl ProviderCategory {
    /// Display order used by the providers tab.
    pub const ALL: [ProviderCategory; 3] = [
        ProviderCategory::Rent,
        ProviderCategory::Flatrate,
        ProviderCategory::Buy,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProviderCategory::Rent => "Rent",
            ProviderCategory::Flatrate => "Flatrate",
            ProviderCategory::Buy => "Buy",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Provider {
    pub provider_name: String,
}

/// Watch-provider listing of one title in one region.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProviderInfo {
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub rent: Option<Vec<Provider>>,
    #[serde(default)]
    pub flatrate: Option<Vec<Provider>>,
    #[serde(default)]
    pub buy: Option<Vec<Provider>>,
}

impl ProviderInfo {
    pub fn category(&self, category: ProviderCategory) -> &[Provider] {
        let list = match category {
            ProviderCategory::Rent => &self.rent,
            ProviderCategory::Flatrate => &self.flatrate,
            ProviderCategory::Buy => &self.buy,
        };
        list.as_deref().unwrap_or(&[])
    }
}

/// Item id -> provider listing. Only items whose lookup succeeded are present.
pub type ProviderMap = HashMap<i64, ProviderInfo>;

/// Providers of `id` in `category`; empty when the id or the category is absent.
pub fn providers_for(map: &ProviderMap, id: i64, category: ProviderCategory) -> &[Provider] {
    map.get(&id).map(|info| info.category(category)).unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_id_yields_empty_list() {
        let map = ProviderMap::new();
        assert!(providers_for(&map, 42, ProviderCategory::Rent).is_empty());
    }

    #[test]
    fn missing_category_yields_empty_list() {
        let mut map = ProviderMap::new();
        map.insert(
            1,
            ProviderInfo {
                buy: Some(vec![Provider { provider_name: "Apple TV".into() }]),
                ..Default::default()
            },
        );

        assert!(providers_for(&map, 1, ProviderCategory::Flatrate).is_empty());
        assert_eq!(providers_for(&map, 1, ProviderCategory::Buy).len(), 1);
    }

    #[test]
    fn deserializes_region_payload() {
        let info: ProviderInfo = serde_json::from_str(
            r#"{"link":"https://example.com","flatrate":[{"provider_name":"Netflix","provider_id":8}]}"#,
        )
        .unwrap();

        assert_eq!(info.category(ProviderCategory::Flatrate)[0].provider_name, "Netflix");
        assert!(info.rent.is_none());
    }
}
