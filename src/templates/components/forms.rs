use crate::domain::{MediaType, Selection};
use crate::views::historical::DateRange;
use crate::views::Tab;
use maud::{html, Markup};

/// Masked credential input; posting it starts a session.
pub fn credential_form() -> Markup {
    html! {
        form method="post" action="/session" class="credential" {
            label for="api_key" { "Enter your API key" }
            " "
            input type="password" id="api_key" name="api_key" autocomplete="off" required;
            " "
            button type="submit" { "Load data" }
        }
    }
}

/// Sidebar pickers. Types come from the loaded feed, titles from the chosen type.
pub fn selection_form(media_types: &[MediaType], titles: &[&str], selection: &Selection) -> Markup {
    html! {
        form method="get" action="/" class="selection" {
            fieldset {
                legend { "Select Media Type" }
                @for media_type in media_types {
                    label {
                        input
                            type="radio"
                            name="type"
                            value=(media_type.as_str())
                            checked[*media_type == selection.media_type]
                            onchange="this.form.submit()";
                        " " (media_type.as_str())
                    }
                    br;
                }
            }

            label for="title" { "Select Media" }
            select name="title" id="title" onchange="this.form.submit()" {
                @for title in titles {
                    option value=(title) selected[*title == selection.title] { (title) }
                }
            }
            noscript { button type="submit" { "Show" } }
        }
    }
}

/// Date pickers bounded by the title's first and last revenue day.
/// Submitting refreshes only the historical-revenue panel.
pub fn date_range_form(selection: &Selection, bounds: &DateRange, range: &DateRange) -> Markup {
    let tab = Tab::HistoricalRevenue;

    html! {
        form
            method="get"
            action="/"
            hx-get=(format!("/tabs/{}", tab.slug()))
            hx-target=(format!("#tab-{}", tab.slug()))
            hx-swap="outerHTML"
            class="date-range"
        {
            input type="hidden" name="type" value=(selection.media_type.as_str());
            input type="hidden" name="title" value=(selection.title);
            label {
                "From "
                input type="date" name="from"
                    min=(bounds.start.to_string()) max=(bounds.end.to_string())
                    value=(range.start.to_string());
            }
            " "
            label {
                "To "
                input type="date" name="to"
                    min=(bounds.start.to_string()) max=(bounds.end.to_string())
                    value=(range.end.to_string());
            }
            " "
            button type="submit" { "Apply" }
        }
    }
}
