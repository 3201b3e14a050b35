// src/domain/revenue.rs

use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::BTreeMap;

/// One day of box-office takings for one title.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RevenueRecord {
    pub title: String,
    pub date: NaiveDate,
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TitleTotal {
    pub title: String,
    pub revenue: f64,
}

/// Sums revenue per title across all dates, highest total first.
/// Equal totals are ordered by title.
pub fn aggregate_by_title(records: &[RevenueRecord]) -> Vec<TitleTotal> {
    let mut sums: BTreeMap<&str, f64> = BTreeMap::new();
    for record in records {
        *sums.entry(record.title.as_str()).or_insert(0.0) += record.revenue;
    }

    let mut totals: Vec<TitleTotal> = sums
        .into_iter()
        .map(|(title, revenue)| TitleTotal {
            title: title.to_string(),
            revenue,
        })
        .collect();

    // stable: BTreeMap order survives for ties
    totals.sort_by(|a, b| b.revenue.total_cmp(&a.revenue));
    totals
}

/// First and last day on which `title` has a record.
pub fn date_bounds(records: &[RevenueRecord], title: &str) -> Option<(NaiveDate, NaiveDate)> {
    records
        .iter()
        .filter(|r| r.title == title)
        .fold(None, |acc, r| match acc {
            None => Some((r.date, r.date)),
            Some((min, max)) => Some((min.min(r.date), max.max(r.date))),
        })
}

/// Records of `title` with `from <= date <= to`, in table order.
pub fn records_in_range<'a>(
    records: &'a [RevenueRecord],
    title: &str,
    from: NaiveDate,
    to: NaiveDate,
) -> Vec<&'a RevenueRecord> {
    records
        .iter()
        .filter(|r| r.title == title && r.date >= from && r.date <= to)
        .collect()
}
