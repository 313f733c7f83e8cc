//! Home Page
//!
//! Public landing page: hero, feature cards, footer.

use leptos::*;

use crate::bridge::use_bridge;

pub fn render(_props: serde_json::Value) -> View {
    view! { <Home /> }.into_view()
}

#[component]
fn Home() -> impl IntoView {
    let bridge = use_bridge();

    view! {
        <div class="min-h-screen flex flex-col">
            // Hero
            <section class="flex-1 flex flex-col items-center justify-center text-center px-4 py-24">
                <h1 class="text-5xl font-bold mb-4">"Admin Starterkit"</h1>
                <p class="text-lg text-gray-500 mb-8 max-w-xl">
                    "Server-driven pages, sensible defaults, and an admin panel that stays out of your way."
                </p>
                <a
                    href="/admin/"
                    class="px-6 py-3 bg-primary-600 hover:bg-primary-700 text-white rounded-lg font-medium transition-colors"
                    on:click=move |ev| {
                        ev.prevent_default();
                        bridge.visit("/admin/");
                    }
                >
                    "Open the admin panel"
                </a>
            </section>

            // Features
            <section class="container mx-auto px-4 pb-24 grid gap-6 md:grid-cols-3">
                <FeatureCard
                    title="Server-driven"
                    body="The backend picks the page and its props. The client just mounts it."
                />
                <FeatureCard
                    title="Users & groups"
                    body="Manage accounts, staff flags and group membership without leaving the panel."
                />
                <FeatureCard
                    title="Your theme"
                    body="Light or dark, remembered across visits."
                />
            </section>

            <footer class="border-t border-gray-200 py-6 text-center text-sm text-gray-400">
                "Admin Starterkit"
            </footer>
        </div>
    }
}

#[component]
fn FeatureCard(title: &'static str, body: &'static str) -> impl IntoView {
    view! {
        <div class="rounded-xl border border-gray-200 p-6">
            <h2 class="text-xl font-semibold mb-2">{title}</h2>
            <p class="text-gray-500">{body}</p>
        </div>
    }
}
