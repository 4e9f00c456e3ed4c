//! # courseboard
//!
//! Leptos + WASM frontend for the course catalog and enrollment platform.
//! Course browsing, enrollment, and the admin CRUD console are thin screens
//! over an external REST API; the reusable core is the token-based session
//! layer (`state::session`, `util::token`, `util::guard`, `util::storage`)
//! that every route composes.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point for client-side hydration.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(crate::app::App);
}
