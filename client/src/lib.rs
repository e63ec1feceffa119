//! Leptos front end for the food-ordering site.
//!
//! ARCHITECTURE
//! ============
//! `app` owns the router and the long-lived signals (session, cart). Pages
//! receive those signals as props; nothing reads the session from ambient
//! context. Route protection lives in `util::auth` and is built on the
//! framework-free `access` crate.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point; hydrates the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
