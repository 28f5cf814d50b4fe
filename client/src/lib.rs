//! # client
//!
//! Leptos + WASM frontend for the sketchpad canvas editor.
//!
//! This crate contains the landing and editor pages, the tool and properties
//! panels, the editor state mirror, and REST helpers for the canvas document
//! API. It drives the `canvas` crate's engine through the `CanvasEditor`
//! bridge component.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // Fails only when a logger is already installed.
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
