//! # marketplace-client
//!
//! Leptos + WASM prototype of a social marketplace: phone, password, and
//! provider sign-in, a guest mode, a product feed, product pages,
//! notifications, and order history, all backed by a simulated API.
//!
//! Navigation is an in-memory store ([`state::session`]) rather than URL
//! routing. The root component asks [`state::access::resolve_page`] which
//! page the current session may see and renders it.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install panic and log hooks, then mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger unavailable: {e}");
    }
    leptos::mount::mount_to_body(app::App);
}
