use crate::domain::revenue::{aggregate_by_title, RevenueRecord};
use crate::views::Bar;
use std::collections::BTreeSet;

pub const TOP_RANKS: usize = 3;
pub const FOLLOWING_RANKS: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct TotalRevenueView {
    /// Zero-based rank of the selected title; `None` if it has no revenue rows.
    pub selected_rank: Option<usize>,
    pub selected_total: Option<f64>,
    pub bars: Vec<Bar>,
}

/// Lifetime revenue ranking around the selected title: the top three, the
/// selected title itself and the ten titles ranked right below it.
///
/// A title missing from the dataset is treated as ranked past the end of the
/// list, so only the top three are shown.
pub fn total_revenue_view(records: &[RevenueRecord], selected: &str) -> TotalRevenueView {
    let totals = aggregate_by_title(records);
    let selected_rank = totals.iter().position(|t| t.title == selected);
    let anchor = selected_rank.unwrap_or(totals.len());

    let mut ranks: BTreeSet<usize> = (0..TOP_RANKS.min(totals.len())).collect();
    if selected_rank.is_some() {
        ranks.insert(anchor);
    }
    let below_end = (anchor + 1 + FOLLOWING_RANKS).min(totals.len());
    ranks.extend((anchor + 1)..below_end);

    let bars = ranks
        .into_iter()
        .map(|rank| {
            let total = &totals[rank];
            Bar {
                label: total.title.clone(),
                value: total.revenue,
                highlighted: Some(rank) == selected_rank,
            }
        })
        .collect();

    TotalRevenueView {
        selected_rank,
        selected_total: selected_rank.map(|rank| totals[rank].revenue),
        bars,
    }
}
