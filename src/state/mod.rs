//! Portal State
//!
//! The three controllers behind the UI: theme preference, session
//! state machine, and dashboard statistics.

pub mod session;
pub mod stats;
pub mod theme;

pub use session::{AuthBackend, LoginError, MockAuth, SessionController, SessionRecord, UserProfile};
pub use stats::{DashboardStats, Entropy, JsEntropy, StatsController};
pub use theme::{Theme, ThemeController};
