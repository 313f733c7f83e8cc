//! Browser tests for the preference stores, the DOM side effects, and the
//! bootstrap payload handling. Run with `wasm-pack test --headless --chrome`.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use admin_ui::bridge;
use admin_ui::prefs::{self, sidebar, theme, theme::Theme};
use leptos::create_runtime;

wasm_bindgen_test_configure!(run_in_browser);

fn storage() -> web_sys::Storage {
    web_sys::window().unwrap().local_storage().unwrap().unwrap()
}

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

fn root_has_dark_class() -> bool {
    document()
        .document_element()
        .unwrap()
        .class_list()
        .contains("dark")
}

fn reset() {
    storage().clear().unwrap();
    theme::apply(Theme::Light);
    if let Some(el) = document().get_element_by_id("app") {
        el.remove();
    }
}

#[wasm_bindgen_test]
fn first_load_defaults_to_light_and_open() {
    reset();

    assert_eq!(theme::read(), Theme::Light);
    assert!(sidebar::read());
}

#[wasm_bindgen_test]
fn garbage_storage_falls_back_to_defaults() {
    reset();
    storage().set_item(theme::STORAGE_KEY, "solarized").unwrap();
    storage().set_item(sidebar::STORAGE_KEY, "maybe").unwrap();

    assert_eq!(theme::read(), Theme::Light);
    assert!(sidebar::read());
}

#[wasm_bindgen_test]
fn apply_is_idempotent_and_converges() {
    reset();

    theme::apply(Theme::Dark);
    theme::apply(Theme::Dark);
    assert!(root_has_dark_class());

    theme::apply(Theme::Light);
    theme::apply(Theme::Light);
    assert!(!root_has_dark_class());
}

#[wasm_bindgen_test]
fn apply_saved_honors_stored_dark_before_mount() {
    reset();
    storage().set_item(theme::STORAGE_KEY, "dark").unwrap();

    theme::apply_saved();

    assert!(root_has_dark_class());
}

#[wasm_bindgen_test]
fn theme_toggle_writes_through_and_survives_reload() {
    reset();

    let runtime = create_runtime();
    prefs::provide_preferences();
    let store = prefs::use_theme();

    store.toggle();
    assert_eq!(store.get(), Theme::Dark);
    // Write-through happens in the same turn as the cell update.
    assert_eq!(
        storage().get_item(theme::STORAGE_KEY).unwrap().as_deref(),
        Some("dark")
    );
    assert!(root_has_dark_class());
    runtime.dispose();

    // Simulated reload: a fresh read sees the persisted value.
    assert_eq!(theme::read(), Theme::Dark);
}

#[wasm_bindgen_test]
fn theme_toggle_is_an_involution() {
    reset();

    let runtime = create_runtime();
    prefs::provide_preferences();
    let store = prefs::use_theme();

    let before = store.get();
    store.toggle();
    store.toggle();
    assert_eq!(store.get(), before);
    assert_eq!(theme::read(), before);
    runtime.dispose();
}

#[wasm_bindgen_test]
fn theme_set_raw_ignores_unknown_values() {
    reset();

    let runtime = create_runtime();
    prefs::provide_preferences();
    let store = prefs::use_theme();

    store.set(Theme::Dark);
    store.set_raw("sepia");
    assert_eq!(store.get(), Theme::Dark);
    assert_eq!(
        storage().get_item(theme::STORAGE_KEY).unwrap().as_deref(),
        Some("dark")
    );
    runtime.dispose();
}

#[wasm_bindgen_test]
fn sidebar_toggle_writes_string_form_through() {
    reset();

    let runtime = create_runtime();
    prefs::provide_preferences();
    let store = prefs::use_sidebar();

    assert!(store.open());
    store.toggle();
    assert!(!store.open());
    assert_eq!(
        storage().get_item(sidebar::STORAGE_KEY).unwrap().as_deref(),
        Some("false")
    );

    store.toggle();
    assert!(store.open());
    assert_eq!(
        storage().get_item(sidebar::STORAGE_KEY).unwrap().as_deref(),
        Some("true")
    );
    runtime.dispose();
}

#[wasm_bindgen_test]
fn mount_resync_picks_up_external_storage_change() {
    reset();
    storage().set_item(sidebar::STORAGE_KEY, "false").unwrap();

    let runtime = create_runtime();
    prefs::provide_preferences();
    // Another tab flipped it after the cells were seeded.
    storage().set_item(sidebar::STORAGE_KEY, "true").unwrap();

    let store = prefs::use_sidebar();
    assert!(store.open());
    runtime.dispose();
}

#[wasm_bindgen_test]
fn mount_resync_picks_up_external_theme_change() {
    reset();

    let runtime = create_runtime();
    prefs::provide_preferences();
    // Cells were seeded light; another tab switched to dark afterwards.
    storage().set_item(theme::STORAGE_KEY, "dark").unwrap();

    let store = prefs::use_theme();
    assert_eq!(store.get(), Theme::Dark);
    // The resync also re-applies the document class.
    assert!(root_has_dark_class());
    runtime.dispose();
}

#[wasm_bindgen_test]
fn initial_page_reads_the_mount_payload() {
    reset();

    let el = document().create_element("div").unwrap();
    el.set_id("app");
    el.set_attribute(
        "data-page",
        r#"{"component":"Home","props":{},"url":"/","version":null}"#,
    )
    .unwrap();
    document().body().unwrap().append_child(&el).unwrap();

    let page = bridge::initial_page().unwrap();
    assert_eq!(page.component, "Home");
    assert_eq!(page.url, "/");

    el.remove();
}

#[wasm_bindgen_test]
fn initial_page_fails_without_mount_element() {
    reset();

    assert!(matches!(
        bridge::initial_page(),
        Err(bridge::BridgeError::MountMissing)
    ));
}

#[wasm_bindgen_test]
fn initial_page_fails_without_payload() {
    reset();

    let el = document().create_element("div").unwrap();
    el.set_id("app");
    document().body().unwrap().append_child(&el).unwrap();

    assert!(matches!(
        bridge::initial_page(),
        Err(bridge::BridgeError::PayloadMissing)
    ));

    el.remove();
}
