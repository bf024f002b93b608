//! # murn-site
//!
//! Leptos + WASM behavior layer for the Murn Interiors brochure site.
//! Replaces the hand-rolled `js/script.js` with a Rust-native UI layer.
//!
//! This crate contains pages, components, pure state modules (validation,
//! search filtering, the enquiry calculator, the lightbox state machine,
//! the localStorage auth demo), and browser glue under `util`. All
//! browser-dependent code is gated behind the `csr` feature so the state
//! modules test on the host with no features enabled.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// Client-side entry point: mounts the app into `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
