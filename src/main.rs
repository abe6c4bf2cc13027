//! SkyLine Airways Employee Portal
//!
//! Internal employee portal built with Leptos (WASM).
//!
//! # Features
//!
//! - Light/dark theme persisted across reloads
//! - Simulated login/logout session (no backend)
//! - Auto-refreshing operations dashboard
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. There is no server: authentication is mocked behind a
//! pluggable backend and all persistence lives in the browser's
//! `localStorage`. The theme, session, and stats controllers are plain
//! structs with injected dependencies so their logic is testable without a
//! browser.

use leptos::*;

mod app;
mod components;
mod pages;
mod state;
mod storage;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::default());

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });

    log::info!("SkyLine Airways Employee Portal initialized successfully!");
}
