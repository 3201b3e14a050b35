use crate::templates::components::{notice, NoticeKind};
use crate::templates::desktop_layout;
use maud::{html, Markup};

/// Load failures (502) keep the "forget key" button so a rejected key can be
/// replaced.
pub fn error_page(status: u16, message: &str) -> Markup {
    desktop_layout(
        &format!("Error {status}"),
        status == 502,
        html! {
            div class="layout" {
                main {
                    h2 { "Error " (status) }
                    (notice(NoticeKind::Error, message))
                    p { a href="/" { "Back to the dashboard" } }
                }
            }
        },
    )
}
