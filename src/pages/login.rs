//! Login Page
//!
//! Landing view with the feature overview and the credential form. The
//! form drives the session controller's mock login.

use leptos::*;
use wasm_bindgen::JsCast;

use crate::app::PortalState;
use crate::components::{FeatureCard, ThemeToggle};

/// Login landing page component
#[component]
pub fn LoginPage() -> impl IntoView {
    let state = use_context::<PortalState>().expect("PortalState not found");

    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let email = email.get();
        let password = password.get();

        // One attempt in flight at a time: the button stays disabled until
        // the result lands.
        set_submitting.set(true);

        let state = state.clone();
        spawn_local(async move {
            let result = {
                let mut session = state.session.borrow_mut();
                session.login(&email, &password).await
            };

            match result {
                Ok(()) => state.show_dashboard(),
                Err(err) => alert(&format!("Login failed: {err}")),
            }

            set_submitting.set(false);
        });
    };

    view! {
        <div class="container min-h-screen">
            // Landing header with brand and theme toggle
            <header class="container mx-auto px-4 py-6 flex items-center justify-between">
                <div class="flex items-center space-x-3">
                    <span class="text-2xl">"✈️"</span>
                    <span class="text-xl font-bold">"SkyLine Airways"</span>
                </div>
                <ThemeToggle />
            </header>

            <main class="container mx-auto px-4 pb-16 grid lg:grid-cols-2 gap-12 items-start">
                // Feature overview
                <section>
                    <h1 class="text-4xl font-bold mb-2">"Employee Portal"</h1>
                    <p class="text-gray-400 mb-8">
                        "Everything your crew needs, in one place."
                    </p>

                    <div class="grid sm:grid-cols-2 gap-4">
                        <FeatureCard
                            icon="🗓️"
                            title="Flight Scheduling"
                            description="Live rosters and duty assignments for every route."
                        />
                        <FeatureCard
                            icon="👨‍✈️"
                            title="Crew Management"
                            description="Qualifications, pairings, and standby coverage."
                        />
                        <FeatureCard
                            icon="🔧"
                            title="Fleet Maintenance"
                            description="Airworthiness status across the whole fleet."
                        />
                        <FeatureCard
                            icon="🗺️"
                            title="Route Planning"
                            description="Optimized routings with weather overlays."
                        />
                        <FeatureCard
                            icon="💼"
                            title="Payroll & Benefits"
                            description="Pay statements, allowances, and leave balances."
                        />
                        <FeatureCard
                            icon="🛡️"
                            title="Safety Reports"
                            description="Confidential occurrence reporting, end to end."
                        />
                    </div>
                </section>

                // Credential form
                <section class="bg-gray-800 rounded-xl p-8 border border-gray-700">
                    <h2 class="text-2xl font-semibold mb-6">"Employee Sign In"</h2>

                    <form on:submit=on_submit class="space-y-4">
                        <CredentialInput
                            label="Email"
                            input_type="email"
                            value=email
                            set_value=set_email
                        />
                        <CredentialInput
                            label="Password"
                            input_type="password"
                            value=password
                            set_value=set_password
                        />

                        <button
                            type="submit"
                            disabled=move || submitting.get()
                            class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                                   disabled:cursor-not-allowed rounded-lg py-3 font-semibold
                                   transition-colors"
                        >
                            {move || if submitting.get() { "Signing in..." } else { "Sign In" }}
                        </button>
                    </form>
                </section>
            </main>
        </div>
    }
}

/// Form input with validity feedback: the border tints green or red on
/// blur based on the browser's built-in validity check, and resets to the
/// theme accent on focus.
#[component]
fn CredentialInput(
    label: &'static str,
    input_type: &'static str,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
) -> impl IntoView {
    let (border, set_border) = create_signal(String::new());

    let on_blur = move |ev: web_sys::FocusEvent| {
        let input = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());

        if let Some(input) = input {
            if input.value().is_empty() {
                set_border.set(String::new());
            } else if input.check_validity() {
                set_border.set("border-color: #10b981".to_string());
            } else {
                set_border.set("border-color: #ef4444".to_string());
            }
        }
    };

    let on_focus = move |_| {
        set_border.set("border-color: var(--primary-color)".to_string());
    };

    view! {
        <div>
            <label class="block text-sm text-gray-400 mb-2">{label}</label>
            <input
                type=input_type
                required=true
                prop:value=move || value.get()
                on:input=move |ev| set_value.set(event_target_value(&ev))
                on:blur=on_blur
                on:focus=on_focus
                style=move || border.get()
                class="form-input w-full bg-gray-700 rounded-lg px-4 py-3
                       border border-gray-600 focus:outline-none"
            />
        </div>
    }
}

/// Browser alert dialog.
fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
