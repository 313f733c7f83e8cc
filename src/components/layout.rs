//! Admin Layout
//!
//! Chrome shared by every admin page: collapsible sidebar plus top bar.

use leptos::*;

use super::{Sidebar, TopBar};
use crate::pages::Auth;

#[component]
pub fn AdminLayout(auth: Auth, children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen flex">
            <Sidebar />
            <div class="flex-1 flex flex-col min-w-0">
                <TopBar auth />
                <main class="flex-1 container mx-auto px-4 py-8">
                    {children()}
                </main>
            </div>
        </div>
    }
}
