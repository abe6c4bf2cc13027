//! Pages
//!
//! The two top-level views: the login landing page and the dashboard.

pub mod dashboard;
pub mod login;

pub use dashboard::DashboardPage;
pub use login::LoginPage;
