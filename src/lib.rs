//! # scorehub-client
//!
//! Leptos + WASM browser client for the ScoreHub academic records
//! portal: students read their own scores, teachers manage scores for
//! their courses.
//!
//! The load-bearing pieces are the HTTP pipeline in [`net::http`]
//! (credential injection, response-envelope normalization, session
//! expiry handling) and the navigation guard in [`util::auth`]; pages
//! are thin views over the typed API surface in [`net::api`].

pub mod app;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// Browser entry point: panic hook, console logging, the global error
/// filter, then mount.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    util::notify::install_global_filter();
    leptos::mount::mount_to_body(app::App);
}
