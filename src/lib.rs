//! # roost-client
//!
//! Leptos + WASM frontend for the Roost short-term rental marketplace.
//! Client-rendered navbar with a user menu, modal-based login and
//! registration, toast notifications, and a thin REST layer for
//! credential submission and session resolution.

pub mod app;
pub mod components;
pub mod form;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
