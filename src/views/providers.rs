use crate::domain::catalog::Catalog;
use crate::domain::providers::{providers_for, ProviderCategory, ProviderMap};

#[derive(Debug, Clone, PartialEq)]
pub struct ProviderIcon {
    pub provider_name: String,
    pub asset: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryIcons {
    pub category: ProviderCategory,
    pub icons: Vec<ProviderIcon>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProvidersView {
    pub region: String,
    /// TMDB page listing every offer for the title, when known.
    pub link: Option<String>,
    /// Always rent, flatrate, buy, in that order.
    pub categories: Vec<CategoryIcons>,
}

/// Icons of the providers offering `id` in `category`. Providers missing from
/// the catalog are left out.
pub fn provider_icons(
    map: &ProviderMap,
    id: i64,
    category: ProviderCategory,
    catalog: &Catalog,
) -> Vec<ProviderIcon> {
    providers_for(map, id, category)
        .iter()
        .filter_map(|provider| {
            catalog.icon_for(&provider.provider_name).map(|asset| ProviderIcon {
                provider_name: provider.provider_name.clone(),
                asset: asset.to_string(),
            })
        })
        .collect()
}

pub fn providers_view(map: &ProviderMap, id: i64, catalog: &Catalog, region: &str) -> ProvidersView {
    let categories = ProviderCategory::ALL
        .into_iter()
        .map(|category| CategoryIcons {
            category,
            icons: provider_icons(map, id, category, catalog),
        })
        .collect();

    ProvidersView {
        region: region.to_string(),
        link: map.get(&id).and_then(|info| info.link.clone()),
        categories,
    }
}
