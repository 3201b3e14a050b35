pub mod charts;
pub mod forms;
pub mod notice;

pub use charts::{bar_chart, daily_revenue_chart, format_revenue, format_score, gauge};
pub use forms::{credential_form, date_range_form, selection_form};
pub use notice::{notice, NoticeKind};
