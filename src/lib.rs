//! # activity-board
//!
//! Leptos + WASM client for an activity sign-up service. Lists activities
//! with their rosters, signs students up, and removes participants through
//! the backend's REST API.
//!
//! The `ActivityBoard` in `board` holds all behavior; `components` and
//! `pages` only render its state and forward browser events to it. Build for
//! the browser with the `csr` feature; native builds exist for testing.

pub mod app;
pub mod board;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs logging and mounts the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::mount_to_body(app::App);
}
