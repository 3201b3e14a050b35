use crate::domain::catalog::Catalog;
use crate::domain::media::TrendingItem;

/// Gauge colors by vote average. Both ends of each range are inclusive,
/// so scores falling between ranges (e.g. 4.995) get the fallback color.
pub const VOTE_COLOR_RANGES: [(f64, f64, &str); 3] = [
    (0.0, 4.99, "#E85E5E"),
    (5.0, 7.99, "#F3E55B"),
    (8.0, 10.0, "#96DC45"),
];
pub const FALLBACK_VOTE_COLOR: &str = "grey";
pub const VOTE_SCALE_MAX: f64 = 10.0;

pub fn vote_color(vote_average: f64) -> &'static str {
    VOTE_COLOR_RANGES
        .iter()
        .find(|(low, high, _)| *low <= vote_average && vote_average <= *high)
        .map(|(_, _, color)| *color)
        .unwrap_or(FALLBACK_VOTE_COLOR)
}

#[derive(Debug, Clone, PartialEq)]
pub struct DescriptionView {
    pub title: String,
    pub overview: String,
    /// Image shown next to the adult-content warning, when the warning applies.
    pub adult_warning_image: Option<String>,
    pub vote_average: f64,
    pub vote_color: &'static str,
    pub vote_count: i64,
}

impl DescriptionView {
    pub const ADULT_WARNING: &'static str = "This movie is for adults only!";
}

pub fn description_view(item: &TrendingItem, catalog: &Catalog) -> DescriptionView {
    let adult = item.adult || catalog.is_adult_override(&item.common_name);

    DescriptionView {
        title: item.common_name.clone(),
        overview: item.overview.clone(),
        adult_warning_image: adult.then(|| catalog.adult_image.clone()),
        vote_average: item.vote_average,
        vote_color: vote_color(item.vote_average),
        vote_count: item.vote_count,
    }
}
