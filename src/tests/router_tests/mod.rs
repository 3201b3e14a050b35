mod dashboard_tests;
mod session_tests;
mod tabs_tests;
