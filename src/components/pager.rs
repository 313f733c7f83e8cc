//! Pager Component
//!
//! Previous/next paging shared by the list pages. Hidden when everything
//! fits on one page.

use leptos::*;

use crate::pages::Pagination;

#[component]
pub fn Pager(pagination: Pagination, on_page: Callback<u32>) -> impl IntoView {
    let page = pagination.page;
    let total_pages = pagination.total_pages;

    view! {
        <Show when=move || { total_pages > 1 }>
            <div class="flex items-center justify-between text-sm">
                <button
                    class="px-3 py-2 rounded-lg border border-gray-200 disabled:opacity-40"
                    disabled={page <= 1}
                    on:click=move |_| on_page.call(page - 1)
                >
                    "Previous"
                </button>
                <span class="text-gray-500">
                    {format!("Page {page} of {total_pages}")}
                </span>
                <button
                    class="px-3 py-2 rounded-lg border border-gray-200 disabled:opacity-40"
                    disabled={page >= total_pages}
                    on:click=move |_| on_page.call(page + 1)
                >
                    "Next"
                </button>
            </div>
        </Show>
    }
}
