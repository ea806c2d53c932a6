//! Group chat web client.
//!
//! SYSTEM CONTEXT
//! ==============
//! Compiled twice: with `ssr` into the host for server rendering, and with
//! `hydrate` into the browser bundle. Only the hydrate build performs network
//! or storage I/O; server builds render the guest shell.
//!
//! ARCHITECTURE
//! ============
//! `net` talks to the REST API, `state` holds pure view-state transitions,
//! `util` has small shared helpers, and `pages`/`components` render.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
