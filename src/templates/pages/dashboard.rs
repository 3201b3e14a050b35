use crate::domain::{MediaType, Selection};
use crate::templates::components::{credential_form, notice, selection_form, NoticeKind};
use crate::templates::desktop_layout;
use crate::templates::layouts::desktop::APP_TITLE;
use crate::templates::pages::tabs::{tab_panel, TabBody};
use crate::views::Tab;
use maud::{html, Markup};

pub const EMPTY_FEED_MESSAGE: &str = "The trending feed returned no movies or tv series.";

pub struct DashboardVm<'a> {
    pub media_types: Vec<MediaType>,
    pub titles: Vec<&'a str>,
    pub selection: &'a Selection,
    /// One entry per tab, in display order.
    pub tabs: Vec<(Tab, TabBody)>,
}

pub fn dashboard_page(vm: &DashboardVm) -> Markup {
    desktop_layout(
        APP_TITLE,
        true,
        html! {
            div class="layout" {
                aside {
                    (selection_form(&vm.media_types, &vm.titles, vm.selection))
                }
                main {
                    (tab_nav())
                    @for (tab, body) in &vm.tabs {
                        (tab_panel(*tab, Some(vm.selection), body))
                    }
                }
            }
        },
    )
}

/// What a visitor without a stored key sees.
pub fn locked_dashboard_page() -> Markup {
    desktop_layout(
        APP_TITLE,
        false,
        html! {
            div class="layout" {
                aside { (credential_form()) }
                main {
                    (tab_nav())
                    @for tab in Tab::ALL {
                        (tab_panel(tab, None, &TabBody::Locked))
                    }
                }
            }
        },
    )
}

pub fn empty_feed_page() -> Markup {
    desktop_layout(
        APP_TITLE,
        true,
        html! {
            div class="layout" {
                main { (notice(NoticeKind::Info, EMPTY_FEED_MESSAGE)) }
            }
        },
    )
}

fn tab_nav() -> Markup {
    html! {
        nav class="tabs" {
            @for tab in Tab::ALL {
                a href=(format!("#tab-{}", tab.slug())) { (tab.label()) }
            }
        }
    }
}
