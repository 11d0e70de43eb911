//! # classdesk
//!
//! Leptos + WASM teacher dashboard for the exam platform. Rust-native UI
//! layer over the platform's teacher REST API.
//!
//! The heart of the crate is [`auth::SessionManager`]: an explicit,
//! injectable owner of the authentication state that every page and
//! credential-bearing network call goes through. Pages, components, wire
//! types, and browser helpers hang off it.

pub mod app;
pub mod auth;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
