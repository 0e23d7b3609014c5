//! # client
//!
//! Leptos + WASM frontend for the movie assistant application.
//!
//! This crate contains the assistant page, its components, the application
//! state container with pure transition functions, and the network layer
//! talking to the relay server's three endpoints.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
