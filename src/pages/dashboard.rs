//! Admin Dashboard Page
//!
//! Summary statistics for the admin panel.

use leptos::*;
use serde::Deserialize;

use super::Auth;
use crate::components::AdminLayout;

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
struct DashboardProps {
    #[serde(default)]
    auth: Auth,
    #[serde(default)]
    stats: DashboardStats,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
struct DashboardStats {
    #[serde(default)]
    user_count: u64,
    #[serde(default)]
    group_count: u64,
}

pub fn render(props: serde_json::Value) -> View {
    let props: DashboardProps = serde_json::from_value(props).unwrap_or_default();
    view! { <DashboardPage props /> }.into_view()
}

#[component]
fn DashboardPage(props: DashboardProps) -> impl IntoView {
    let stats = props.stats;

    view! {
        <AdminLayout auth=props.auth>
            <div class="space-y-8">
                <div>
                    <h1 class="text-3xl font-bold">"Dashboard"</h1>
                    <p class="text-gray-500 mt-1">"At a glance"</p>
                </div>

                <div class="grid gap-6 sm:grid-cols-2">
                    <StatCard label="Users" value=stats.user_count href="/admin/users/" />
                    <StatCard label="Groups" value=stats.group_count href="/admin/groups/" />
                </div>
            </div>
        </AdminLayout>
    }
}

#[component]
fn StatCard(label: &'static str, value: u64, href: &'static str) -> impl IntoView {
    let bridge = crate::bridge::use_bridge();

    view! {
        <a
            href=href
            class="block rounded-xl border border-gray-200 p-6 hover:border-primary-500 transition-colors"
            on:click=move |ev| {
                ev.prevent_default();
                bridge.visit(href);
            }
        >
            <div class="text-4xl font-bold">{value}</div>
            <div class="text-gray-500 mt-1">{label}</div>
        </a>
    }
}
