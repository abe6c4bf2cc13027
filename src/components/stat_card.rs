//! Stat Card Component
//!
//! Displays a single dashboard statistic.

use leptos::*;

/// Stat card component
#[component]
pub fn StatCard(
    /// Label shown above the value
    label: &'static str,
    /// Decorative icon
    icon: &'static str,
    /// Formatted value to display
    #[prop(into)]
    value: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="dashboard-card bg-gray-800 rounded-lg p-4 border border-gray-700">
            <div class="flex items-center justify-between">
                <span class="text-gray-400 text-sm">{label}</span>
                <span class="text-lg">{icon}</span>
            </div>

            <div class="stat-number text-3xl font-bold mt-2">
                {move || value.get()}
            </div>
        </div>
    }
}
