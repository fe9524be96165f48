// lib.rs - Root module for the storefront_ui library
//
// The same library is compiled twice: with `ssr` for the server binary and
// with `hydrate` to WASM for the browser. Models, errors, config and fixtures
// build without either feature so their tests run on a plain `cargo test`.

pub mod config;
pub mod error;
pub mod fixtures;
pub mod web_app;

pub use error::{Result, StorefrontError};

/// WASM entry point: attaches the reactive system to the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(web_app::App);
}
