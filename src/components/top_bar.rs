//! Top Bar Component
//!
//! Current user, theme toggle, and logout.

use leptos::*;
use serde_json::json;

use crate::bridge::use_bridge;
use crate::pages::Auth;
use crate::prefs::theme::Theme;
use crate::prefs::use_theme;

#[component]
pub fn TopBar(auth: Auth) -> impl IntoView {
    let bridge = use_bridge();
    let theme = use_theme();

    let username = auth
        .user
        .map(|user| user.username)
        .unwrap_or_else(|| "anonymous".to_string());

    view! {
        <header class="h-16 border-b border-gray-200 flex items-center justify-end px-4 space-x-4">
            <button
                class="px-3 py-2 rounded-lg text-gray-500 hover:bg-gray-100 transition-colors"
                title="Toggle theme"
                on:click=move |_| theme.toggle()
            >
                {move || match theme.get() {
                    Theme::Light => "☾",
                    Theme::Dark => "☀",
                }}
            </button>

            <span class="text-sm text-gray-500">{username}</span>

            // Logout is POST-only on the backend.
            <button
                class="px-3 py-2 rounded-lg text-gray-500 hover:bg-gray-100 transition-colors"
                on:click=move |_| bridge.post("/logout/", json!({}))
            >
                "Sign out"
            </button>
        </header>
    }
}
