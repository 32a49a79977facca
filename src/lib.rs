//! # jobboard
//!
//! Leptos + WASM single-page client for a job-posting marketplace: visitors
//! register and log in, authenticated users browse a paginated job feed.
//!
//! The session lives in an injectable [`auth::Session`] service backed by an
//! origin-keyed token in `localStorage`; route access goes through the guard
//! components in [`components::route_guard`]; the feed accumulates pages
//! through the state machine in [`state::jobs`]. All browser-only concerns
//! (HTTP, storage, timers) are gated behind the `hydrate` feature.

pub mod app;
pub mod auth;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Client-side entry point: set up panic/log forwarding to the console and
/// hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    leptos::mount::hydrate_body(App);
}
