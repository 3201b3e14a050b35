use crate::domain::revenue::{date_bounds, records_in_range, RevenueRecord};
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DailyRevenue {
    pub date: NaiveDate,
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum HistoricalView {
    /// The title has no revenue rows at all.
    NoRelease { title: String },
    /// `days` is empty when nothing falls inside `range`.
    Available {
        bounds: DateRange,
        range: DateRange,
        days: Vec<DailyRevenue>,
    },
}

impl HistoricalView {
    pub fn no_release_message(title: &str) -> String {
        format!("Date range is not available. Probably {title} didn't have premier yet")
    }

    pub const EMPTY_RANGE_MESSAGE: &'static str =
        "No revenue data available for the selected movie.";
}

/// Per-day revenue of `selected` between `from` and `to` (inclusive).
/// Missing ends default to the title's first/last day; requested ends are
/// clamped into those bounds.
pub fn historical_revenue_view(
    records: &[RevenueRecord],
    selected: &str,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> HistoricalView {
    let Some((min, max)) = date_bounds(records, selected) else {
        return HistoricalView::NoRelease {
            title: selected.to_string(),
        };
    };

    let range = DateRange {
        start: from.unwrap_or(min).clamp(min, max),
        end: to.unwrap_or(max).clamp(min, max),
    };

    let days = records_in_range(records, selected, range.start, range.end)
        .into_iter()
        .map(|r| DailyRevenue {
            date: r.date,
            revenue: r.revenue,
        })
        .collect();

    HistoricalView::Available {
        bounds: DateRange { start: min, end: max },
        range,
        days,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, date: &str, revenue: f64) -> RevenueRecord {
        RevenueRecord {
            title: title.to_string(),
            date: date.parse().unwrap(),
            revenue,
        }
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn table() -> Vec<RevenueRecord> {
        vec![
            record("Wonka", "2023-12-15", 39.0),
            record("Dune", "2024-03-01", 81.5),
            record("Wonka", "2023-12-16", 25.0),
            record("Wonka", "2023-12-17", 14.0),
            record("Wonka", "2023-12-18", 3.5),
        ]
    }

    fn days(view: &HistoricalView) -> Vec<f64> {
        match view {
            HistoricalView::Available { days, .. } => days.iter().map(|d| d.revenue).collect(),
            HistoricalView::NoRelease { .. } => panic!("expected data"),
        }
    }

    #[test]
    fn full_bounds_return_every_record() {
        let view = historical_revenue_view(
            &table(),
            "Wonka",
            Some(date("2023-12-15")),
            Some(date("2023-12-18")),
        );
        assert_eq!(days(&view), vec![39.0, 25.0, 14.0, 3.5]);
    }

    #[test]
    fn default_range_is_the_full_bounds() {
        let view = historical_revenue_view(&table(), "Wonka", None, None);

        match &view {
            HistoricalView::Available { bounds, range, .. } => {
                assert_eq!(bounds, range);
                assert_eq!(bounds.start, date("2023-12-15"));
                assert_eq!(bounds.end, date("2023-12-18"));
            }
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(days(&view).len(), 4);
    }

    #[test]
    fn sub_range_is_inclusive() {
        let view = historical_revenue_view(
            &table(),
            "Wonka",
            Some(date("2023-12-16")),
            Some(date("2023-12-17")),
        );
        assert_eq!(days(&view), vec![25.0, 14.0]);
    }

    #[test]
    fn requested_range_is_clamped_into_bounds() {
        let view = historical_revenue_view(
            &table(),
            "Wonka",
            Some(date("2020-01-01")),
            Some(date("2023-12-16")),
        );

        match &view {
            HistoricalView::Available { range, .. } => {
                assert_eq!(range.start, date("2023-12-15"));
            }
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(days(&view), vec![39.0, 25.0]);
    }

    #[test]
    fn reversed_range_is_empty() {
        let view = historical_revenue_view(
            &table(),
            "Wonka",
            Some(date("2023-12-18")),
            Some(date("2023-12-15")),
        );
        assert!(days(&view).is_empty());
    }

    #[test]
    fn title_without_records_reports_no_release() {
        let view = historical_revenue_view(&table(), "Deadpool 3", None, None);

        assert_eq!(
            view,
            HistoricalView::NoRelease {
                title: "Deadpool 3".into()
            }
        );
        assert!(HistoricalView::no_release_message("Deadpool 3").contains("Deadpool 3"));
    }
}
