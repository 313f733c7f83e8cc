//! Sidebar Component
//!
//! Collapsible navigation for the admin panel. Open/collapsed state comes
//! from the persisted sidebar store; links navigate through the bridge.

use leptos::*;

use crate::bridge::use_bridge;
use crate::prefs::use_sidebar;

#[component]
pub fn Sidebar() -> impl IntoView {
    let sidebar = use_sidebar();

    view! {
        <aside class=move || {
            if sidebar.open() {
                "w-64 border-r border-gray-200 flex flex-col transition-all"
            } else {
                "w-16 border-r border-gray-200 flex flex-col transition-all"
            }
        }>
            <div class="h-16 flex items-center px-4 font-bold text-lg">
                {move || if sidebar.open() { "Admin" } else { "A" }}
            </div>

            <nav class="flex-1 py-4 space-y-1">
                <SidebarLink href="/admin/" label="Dashboard" icon="■" />
                <SidebarLink href="/admin/users/" label="Users" icon="◉" />
                <SidebarLink href="/admin/groups/" label="Groups" icon="◎" />
            </nav>

            <button
                class="h-12 border-t border-gray-200 text-gray-500 hover:text-gray-900 transition-colors"
                title=move || if sidebar.open() { "Collapse sidebar" } else { "Expand sidebar" }
                on:click=move |_| sidebar.toggle()
            >
                {move || if sidebar.open() { "«" } else { "»" }}
            </button>
        </aside>
    }
}

#[component]
fn SidebarLink(href: &'static str, label: &'static str, icon: &'static str) -> impl IntoView {
    let bridge = use_bridge();
    let sidebar = use_sidebar();

    let active = move || bridge.url() == href;

    view! {
        <a
            href=href
            class=move || {
                let base = "flex items-center px-4 py-2 mx-2 rounded-lg transition-colors";
                if active() {
                    format!("{base} bg-primary-600 text-white")
                } else {
                    format!("{base} text-gray-500 hover:bg-gray-100 hover:text-gray-900")
                }
            }
            on:click=move |ev| {
                ev.prevent_default();
                bridge.visit(href);
            }
        >
            <span class="w-6 text-center">{icon}</span>
            <Show when=move || sidebar.open()>
                <span class="ml-2">{label}</span>
            </Show>
        </a>
    }
}
