//! # bothub-console
//!
//! Leptos + WASM frontend for the BotHub client registry. Operators
//! register clients (each issued a bot identity by the backend), browse and
//! delete them, and verify bot identifiers against the authorization
//! endpoint. All business logic lives behind the backend HTTP contract;
//! this crate is the presentation layer only.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs panic/log hooks and hydrates the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
