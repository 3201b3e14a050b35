use maud::{html, Markup, PreEscaped, DOCTYPE};

pub const APP_TITLE: &str = "Interactive Movie Data Dashboard";

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; background: #fafafa; color: #100f0f; }
header { display: flex; align-items: center; justify-content: space-between; padding: 0.75rem 1.5rem; background: #7c9fe4; }
header h1 { font-size: 1.4rem; margin: 0; }
.layout { display: flex; gap: 2rem; padding: 1.5rem; }
aside { min-width: 220px; }
main { flex: 1; max-width: 960px; }
nav.tabs a { margin-right: 1rem; }
.tab-panel { background: #fff; border-radius: 8px; padding: 1rem 1.5rem; margin-bottom: 1.5rem; box-shadow: 0 1px 3px rgba(0,0,0,.1); }
.notice { padding: 0.75rem 1rem; border-radius: 6px; margin: 0.5rem 0; }
.notice-info { background: #e8f0fe; }
.notice-warning { background: #fff4ce; }
.notice-error { background: #fde2e1; color: #8a1c1c; }
.bar-row { display: flex; align-items: center; gap: 0.5rem; margin: 0.25rem 0; }
.bar-label { width: 220px; overflow: hidden; text-overflow: ellipsis; white-space: nowrap; }
.bar-track { flex: 1; background: #f0f0f0; height: 1.1rem; border-radius: 3px; }
.bar { height: 100%; border-radius: 3px; }
.bar-annotation { font-size: 0.8rem; color: #E85E5E; font-weight: bold; }
.gauge-track { background: #f0f0f0; height: 1.5rem; border-radius: 4px; max-width: 480px; }
.gauge-bar { height: 100%; border-radius: 4px; }
.adult-warning { color: red; text-align: center; font-weight: bold; }
.provider-icons img { width: 40px; height: 40px; margin-right: 0.5rem; border-radius: 6px; }
"#;

pub fn desktop_layout(title: &str, signed_in: bool, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(STYLE)) }
                script src="https://unpkg.com/htmx.org@1.9.12" defer {};
            }
            body {
                header {
                    h1 { (APP_TITLE) }
                    @if signed_in {
                        form method="post" action="/session/end" {
                            button type="submit" { "Forget API key" }
                        }
                    }
                }
                (content)
            }
        }
    }
}
