//! Parallel You browser client.
//!
//! SYSTEM CONTEXT
//! ==============
//! Built twice: as a WASM bundle (`hydrate`) that owns the live session and
//! talks to the backend, and as an rlib (`ssr`) the host server links to
//! render the initial HTML.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod content;
pub mod controller;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
