//! Admin Dashboard
//!
//! Client bootstrap for the server-driven admin panel, built with Leptos (WASM).
//!
//! The backend decides which page component to render and hands the client a
//! page payload (component name + props). This crate only resolves the
//! component, mounts it, and keeps two persisted UI preferences (color theme,
//! sidebar state) in sync with local storage.
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Navigation goes through the server-driven bridge rather than a
//! client-side router: every visit fetches a new page payload over HTTP.

use leptos::*;

pub mod api;
pub mod app;
pub mod bridge;
pub mod components;
pub mod pages;
pub mod prefs;

/// Full bootstrap sequence. Order matters: theme before paint, client config
/// before any request, payload and resolver before mount.
pub fn boot() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    // Apply the persisted theme before anything renders. This reads storage
    // directly instead of going through the reactive cell so there is no
    // flash of the wrong theme before the first paint.
    prefs::theme::apply_saved();

    // Every request from here on carries the CSRF cookie's value as a header.
    api::client::configure(api::client::ClientConfig::default());

    let initial = bridge::initial_page().expect("invalid initial page payload");

    // An initial payload naming an unregistered component is an unrecoverable
    // startup failure.
    if let Err(err) = bridge::resolver::resolve(&initial.component) {
        panic!("{err}");
    }

    let root = bridge::mount_element().expect("mount element #app not found");
    mount_to(root, move || view! { <app::App initial /> });
}
