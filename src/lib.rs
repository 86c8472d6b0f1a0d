//! # mydiary-client
//!
//! Leptos + WASM frontend for the personal-diary web application. Replaces
//! the per-page vanilla JS scripts with a single Rust client: session-gated
//! navigation, signup/login/password-recovery forms, and diary entry CRUD
//! views.
//!
//! The session gate in [`session`] is the load-bearing piece: every
//! protected page routes through it, and it owns the redirect-to-login
//! protocol including the pending-destination round trip.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod session;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and hydrate the app shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
