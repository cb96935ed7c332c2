//! # property-listings
//!
//! Leptos + WASM frontend that shows a navigation bar and a list of property
//! cards. Records come from the embedded catalog document, are validated by
//! the `listings` crate, and flow one way: catalog → list → card.
//!
//! This crate contains the application root, components, pages, listing
//! state, the component registry, and the route table.

pub mod app;
pub mod components;
pub mod config;
pub mod pages;
pub mod registry;
pub mod routes;
pub mod state;
pub mod util;

pub use app::App;

/// Browser entry point: install logging and the panic hook, then mount [`App`].
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn mount() {
    let config = config::AppConfig::from_env();
    console_error_panic_hook::set_once();
    util::logging::init(config.log_level);
    log::info!("mounting {}", config.title);
    leptos::mount::mount_to_body(App);
}
