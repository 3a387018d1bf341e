//! # memefactory
//!
//! Leptos + WASM frontend for the MemeFactory meme-sharing service.
//!
//! This crate contains pages, components, session state, REST wire types, and
//! the caption layout math used to render memes at any width. The backend is
//! an external REST service; see [`net::api`] for the endpoints consumed.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and the panic hook, then mount [`app::App`].
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
