pub mod dashboard;
pub mod error;
pub mod tabs;

pub use dashboard::{dashboard_page, empty_feed_page, locked_dashboard_page, DashboardVm};
pub use error::error_page;
pub use tabs::{tab_panel, TabBody};
