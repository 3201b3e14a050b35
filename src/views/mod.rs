//! Pure view functions. Each takes the loaded tables plus the current
//! selection and returns what to draw; templates turn that into markup.

pub mod description;
pub mod historical;
pub mod popularity;
pub mod providers;
pub mod total_revenue;

pub use description::{description_view, DescriptionView};
pub use historical::{historical_revenue_view, HistoricalView};
pub use popularity::{popularity_view, PopularityView};
pub use providers::{providers_view, ProvidersView};
pub use total_revenue::{total_revenue_view, TotalRevenueView};

pub const HIGHLIGHT_COLOR: &str = "#E85E5E";
pub const BAR_COLOR: &str = "#7C9FE4";

/// One bar of a ranking chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    pub highlighted: bool,
}

impl Bar {
    pub fn color(&self) -> &'static str {
        if self.highlighted {
            HIGHLIGHT_COLOR
        } else {
            BAR_COLOR
        }
    }
}

/// The dashboard tabs, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Description,
    Popularity,
    HistoricalRevenue,
    TotalRevenue,
    Providers,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::Description,
        Tab::Popularity,
        Tab::HistoricalRevenue,
        Tab::TotalRevenue,
        Tab::Providers,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            Tab::Description => "description",
            Tab::Popularity => "popularity",
            Tab::HistoricalRevenue => "historical-revenue",
            Tab::TotalRevenue => "total-revenue",
            Tab::Providers => "providers",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Description => "Description",
            Tab::Popularity => "Popularity",
            Tab::HistoricalRevenue => "Historical revenue",
            Tab::TotalRevenue => "Total revenue",
            Tab::Providers => "Providers",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Tab::ALL.into_iter().find(|tab| tab.slug() == slug)
    }
}
