//! UI Components
//!
//! Reusable Leptos components for the portal.

pub mod feature_card;
pub mod nav;
pub mod stat_card;

pub use feature_card::FeatureCard;
pub use nav::{Nav, ThemeToggle};
pub use stat_card::StatCard;
