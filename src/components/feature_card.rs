//! Feature Card Component
//!
//! Marketing card on the landing page with a hover lift effect.

use leptos::*;

/// Feature card component
#[component]
pub fn FeatureCard(
    /// Decorative icon
    icon: &'static str,
    /// Feature title
    title: &'static str,
    /// Short description
    description: &'static str,
) -> impl IntoView {
    let (transform, set_transform) = create_signal("translateY(0) scale(1)");

    view! {
        <div
            class="feature-card bg-gray-800 rounded-xl p-6 border border-gray-700
                   transition-transform"
            style=move || format!("transform: {}", transform.get())
            on:mouseenter=move |_| set_transform.set("translateY(-4px) scale(1.02)")
            on:mouseleave=move |_| set_transform.set("translateY(0) scale(1)")
        >
            <div class="text-3xl mb-3">{icon}</div>
            <h3 class="font-semibold text-lg mb-1">{title}</h3>
            <p class="text-sm text-gray-400">{description}</p>
        </div>
    }
}
