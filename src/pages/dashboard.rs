//! Dashboard Page
//!
//! Operations overview shown after login: welcome header and the four
//! auto-refreshing stat cards.

use leptos::*;

use crate::app::PortalState;
use crate::components::{Nav, StatCard};

/// Dashboard page component
#[component]
pub fn DashboardPage() -> impl IntoView {
    let state = use_context::<PortalState>().expect("PortalState not found");

    let stats = state.stats;
    let current_user = state.current_user;

    view! {
        <div id="dashboard" class="min-h-screen">
            <Nav />

            <main class="container mx-auto px-4 py-8 space-y-8">
                // Welcome header
                <div>
                    <h1 class="text-3xl font-bold">
                        {move || {
                            current_user
                                .get()
                                .map(|u| format!("Welcome back, {}", u.name))
                                .unwrap_or_else(|| "Welcome back".to_string())
                        }}
                    </h1>
                    <p class="text-gray-400 mt-1">
                        {move || {
                            current_user
                                .get()
                                .map(|u| format!("{} · {}", u.role, u.department))
                                .unwrap_or_default()
                        }}
                    </p>
                </div>

                // Stat cards
                <section>
                    <h2 class="text-lg font-semibold mb-4">"Operations Today"</h2>
                    <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                        <StatCard
                            label="Active Flights"
                            icon="✈️"
                            value=Signal::derive(move || stats.get().active_flights.to_string())
                        />
                        <StatCard
                            label="Today's Revenue"
                            icon="💰"
                            value=Signal::derive(move || stats.get().revenue_display())
                        />
                        <StatCard
                            label="Available Aircraft"
                            icon="🛩️"
                            value=Signal::derive(move || stats.get().aircraft_display())
                        />
                        <StatCard
                            label="Active Employees"
                            icon="👥"
                            value=Signal::derive(move || stats.get().active_employees.to_string())
                        />
                    </div>
                </section>
            </main>
        </div>
    }
}
