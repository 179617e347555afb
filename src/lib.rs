//! # folio
//!
//! Page controller for a static portfolio site, compiled to WebAssembly.
//!
//! The markup is authored by hand and served as-is; this crate attaches the
//! interactive behaviour once the document is ready: mobile navigation,
//! a persisted light/dark theme, the project preview switcher, contact form
//! validation with a simulated send, anchor smooth scrolling, the header
//! scroll style, and the footer year.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | Installs every component against a [`surface::Surface`] |
//! | [`components`] | One module per page behaviour |
//! | [`state`] | Plain UI state types (menu, theme, selection, form) |
//! | [`surface`] | Abstract element/event interface, in-memory and browser impls |
//! | [`util`] | Storage, timers, cancellable tasks, clock, email shape check |
//! | [`config`] | Element ids, class names, messages, and delays |
//! | [`error`] | Configuration and wiring errors |
//!
//! Browser bindings are gated behind the `hydrate` feature. Without it the
//! crate builds as plain Rust and is driven headless by the test suite.

pub mod components;
pub mod config;
pub mod controller;
pub mod error;
pub mod state;
pub mod surface;
pub mod util;

#[cfg(feature = "hydrate")]
mod boot;

/// WASM entry point.
///
/// Installs the panic hook and console logger, then attaches the page
/// controller once the DOM has been parsed.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("console logger unavailable: {err}").into());
    }
    boot::run();
}
