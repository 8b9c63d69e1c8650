//! # composer
//!
//! Leptos frontend for the two-step post composer: a validated form for
//! drafting a fanpage post, followed by a preview of the generated content.
//!
//! Form rules, the step machine and the pluggable collaborators are plain
//! Rust in `state`, `services` and `util`, so they test on the host target.
//! `components` and `pages` only bind them to signals.

pub mod app;
pub mod components;
pub mod pages;
pub mod services;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
