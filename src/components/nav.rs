//! Dashboard Header
//!
//! Brand bar with the signed-in employee, theme toggle, and logout.

use leptos::*;

use crate::app::PortalState;
use crate::state::theme::Theme;

/// Dashboard navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let state = use_context::<PortalState>().expect("PortalState not found");

    let current_user = state.current_user;

    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <div class="flex items-center space-x-3">
                        <span class="text-2xl">"✈️"</span>
                        <span class="text-xl font-bold text-white">"SkyLine Airways"</span>
                    </div>

                    <div class="flex items-center space-x-4">
                        <span id="user-name" class="text-gray-300">
                            {move || {
                                current_user.get().map(|u| u.name).unwrap_or_default()
                            }}
                        </span>

                        <ThemeToggle />

                        <button
                            on:click=move |_| state.logout()
                            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white
                                   hover:bg-gray-700 transition-colors"
                        >
                            "Log Out"
                        </button>
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Sun/moon button flipping the persisted theme.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let state = use_context::<PortalState>().expect("PortalState not found");

    let theme = state.theme;

    view! {
        <button
            id="theme-toggle"
            title="Toggle theme"
            on:click=move |_| state.toggle_theme()
            class="px-3 py-2 rounded-lg text-gray-300 hover:text-white
                   hover:bg-gray-700 transition-colors"
        >
            {move || if theme.get() == Theme::Dark { "☾" } else { "☀" }}
        </button>
    }
}
