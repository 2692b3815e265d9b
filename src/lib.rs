//! # portfolio
//!
//! Leptos + WASM client for a personal portfolio site.
//!
//! This crate renders the interactive parts of the page: a random "find me"
//! location link, a timed basil slideshow, and a comments section backed by
//! the site's `/data`, `/like` and `/login` endpoints. View-models live in
//! `state` as plain structs so rendering decisions can be tested without a
//! browser document; `components` only map them to DOM.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod state;
pub mod util;

/// Browser entry point: installs console logging and mounts [`app::App`].
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    log::info!("mounting portfolio view");
    leptos::mount::mount_to_body(app::App);
}
