use crate::domain::Selection;
use crate::templates::components::{
    bar_chart, daily_revenue_chart, date_range_form, format_revenue, format_score, gauge, notice,
    NoticeKind,
};
use crate::views::description::VOTE_SCALE_MAX;
use crate::views::{
    DescriptionView, HistoricalView, PopularityView, ProvidersView, Tab, TotalRevenueView,
};
use maud::{html, Markup};

pub const LOCKED_MESSAGE: &str = "Please enter your API key to proceed.";
pub const NO_TV_REVENUE_MESSAGE: &str = "No revenue data for tv series";

/// What one tab shows once the request has been resolved.
#[derive(Debug, Clone, PartialEq)]
pub enum TabBody {
    Locked,
    Description(DescriptionView),
    Popularity(PopularityView),
    HistoricalRevenue(HistoricalView),
    TotalRevenue(TotalRevenueView),
    Providers(ProvidersView),
    NoRevenueForTv,
}

/// A tab panel. The `id` is the htmx swap target for partial refreshes.
pub fn tab_panel(tab: Tab, selection: Option<&Selection>, body: &TabBody) -> Markup {
    html! {
        section class="tab-panel" id=(format!("tab-{}", tab.slug())) {
            h2 { (tab.label()) }
            @match body {
                TabBody::Locked => (notice(NoticeKind::Info, LOCKED_MESSAGE)),
                TabBody::NoRevenueForTv => (notice(NoticeKind::Warning, NO_TV_REVENUE_MESSAGE)),
                TabBody::Description(view) => (description(view)),
                TabBody::Popularity(view) => (popularity(view, selection)),
                TabBody::HistoricalRevenue(view) => (historical(view, selection)),
                TabBody::TotalRevenue(view) => (total_revenue(view, selection)),
                TabBody::Providers(view) => (providers(view)),
            }
        }
    }
}

fn description(view: &DescriptionView) -> Markup {
    html! {
        h3 { (view.title) }
        @if let Some(image) = &view.adult_warning_image {
            p class="adult-warning" { (DescriptionView::ADULT_WARNING) }
            img class="adult-image" src=(format!("/{image}")) alt="Adults only";
        }
        p { (view.overview) }

        h4 { "Rating" }
        (gauge("Average Vote", view.vote_average, VOTE_SCALE_MAX, view.vote_color))
        p { "Vote Count: " (view.vote_count) }
    }
}

fn popularity(view: &PopularityView, selection: Option<&Selection>) -> Markup {
    html! {
        @if let (Some(selection), Some(score)) = (selection, view.selected_popularity) {
            p { "Popularity of " strong { (selection.title) } ": " (format_score(score)) }
        }
        (bar_chart(&view.bars, format_score))
    }
}

fn historical(view: &HistoricalView, selection: Option<&Selection>) -> Markup {
    match view {
        HistoricalView::NoRelease { title } => {
            notice(NoticeKind::Error, &HistoricalView::no_release_message(title))
        }
        HistoricalView::Available { bounds, range, days } => html! {
            @if let Some(selection) = selection {
                (date_range_form(selection, bounds, range))
            }
            @if days.is_empty() {
                (notice(NoticeKind::Warning, HistoricalView::EMPTY_RANGE_MESSAGE))
            } @else {
                (daily_revenue_chart(days))
            }
        },
    }
}

fn total_revenue(view: &TotalRevenueView, selection: Option<&Selection>) -> Markup {
    html! {
        @match (view.selected_rank, view.selected_total) {
            (Some(rank), Some(total)) => {
                p { "Rank " strong { "#" (rank + 1) } ", lifetime revenue " strong { (format_revenue(total)) } }
            }
            _ => {
                @if let Some(selection) = selection {
                    (notice(NoticeKind::Info, &format!("No revenue data for {}", selection.title)))
                }
            }
        }
        (bar_chart(&view.bars, format_revenue))
    }
}

fn providers(view: &ProvidersView) -> Markup {
    html! {
        h3 { "Available providers in " (view.region) }
        @for group in &view.categories {
            h5 { (group.category.label()) }
            div class="provider-icons" {
                @for icon in &group.icons {
                    img src=(format!("/{}", icon.asset)) alt=(icon.provider_name) title=(icon.provider_name);
                }
            }
        }
        @if let Some(link) = view.link.as_deref().filter(|l| is_web_link(l)) {
            p { a href=(link) target="_blank" rel="noopener" { "All offers" } }
        }
    }
}

fn is_web_link(link: &str) -> bool {
    link.starts_with("https://") || link.starts_with("http://")
}
