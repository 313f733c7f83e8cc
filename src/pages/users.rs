//! Users List Page
//!
//! Paginated, searchable user table. Search, ordering and paging all round-
//! trip through the bridge so the backend stays the source of truth.

use leptos::*;
use serde::Deserialize;
use serde_json::json;

use super::{Auth, Filters, Pagination};
use crate::bridge::use_bridge;
use crate::components::{AdminLayout, Pager};

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
struct UsersProps {
    #[serde(default)]
    auth: Auth,
    #[serde(default)]
    users: Vec<UserRow>,
    #[serde(default)]
    pagination: Pagination,
    #[serde(default)]
    filters: Filters,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
struct UserRow {
    #[serde(default)]
    id: i64,
    #[serde(default)]
    username: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    is_staff: bool,
    #[serde(default)]
    is_superuser: bool,
    #[serde(default)]
    is_active: bool,
}

pub fn render(props: serde_json::Value) -> View {
    let props: UsersProps = serde_json::from_value(props).unwrap_or_default();
    view! { <UsersPage props /> }.into_view()
}

fn list_url(search: &str, order_by: &str, page: u32) -> String {
    let mut url = format!("/admin/users/?page={page}");
    if !search.is_empty() {
        url.push_str(&format!("&search={search}"));
    }
    if !order_by.is_empty() {
        url.push_str(&format!("&order_by={order_by}"));
    }
    url
}

#[component]
fn UsersPage(props: UsersProps) -> impl IntoView {
    let bridge = use_bridge();

    let order_by = props.filters.order_by.clone();
    let (search, set_search) = create_signal(props.filters.search.clone());

    let run_search = {
        let order_by = order_by.clone();
        move || bridge.visit(&list_url(&search.get_untracked(), &order_by, 1))
    };
    let submit = {
        let run_search = run_search.clone();
        move |ev: ev::SubmitEvent| {
            ev.prevent_default();
            run_search();
        }
    };

    let users = props.users;
    let pagination = props.pagination;

    view! {
        <AdminLayout auth=props.auth>
            <div class="space-y-6">
                <div class="flex items-center justify-between">
                    <div>
                        <h1 class="text-3xl font-bold">"Users"</h1>
                        <p class="text-gray-500 mt-1">
                            {format!("{} total", pagination.total)}
                        </p>
                    </div>
                    <button
                        class="px-4 py-2 bg-primary-600 hover:bg-primary-700 text-white
                               rounded-lg font-medium transition-colors"
                        on:click=move |_| bridge.visit("/admin/users/create/")
                    >
                        "New user"
                    </button>
                </div>

                // Search
                <form class="flex space-x-2" on:submit=submit>
                    <input
                        type="text"
                        placeholder="Search username or email"
                        prop:value=move || search.get()
                        on:input=move |ev| set_search.set(event_target_value(&ev))
                        class="flex-1 max-w-sm rounded-lg px-4 py-2 border border-gray-300
                               focus:border-primary-500 focus:outline-none"
                    />
                    <button
                        type="submit"
                        class="px-4 py-2 bg-primary-600 hover:bg-primary-700 text-white
                               rounded-lg font-medium transition-colors"
                    >
                        "Search"
                    </button>
                </form>

                // Table
                <div class="overflow-x-auto rounded-xl border border-gray-200">
                    <table class="w-full text-left">
                        <thead class="border-b border-gray-200 text-sm text-gray-500">
                            <tr>
                                <th class="px-4 py-3">"Username"</th>
                                <th class="px-4 py-3">"Email"</th>
                                <th class="px-4 py-3">"Staff"</th>
                                <th class="px-4 py-3">"Superuser"</th>
                                <th class="px-4 py-3">"Active"</th>
                                <th class="px-4 py-3"></th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || users.clone()
                                key=|user| user.id
                                let:user
                            >
                                <UserTableRow user />
                            </For>
                        </tbody>
                    </table>
                </div>

                <Pager
                    pagination
                    on_page=Callback::new({
                        let order_by = order_by.clone();
                        move |page| {
                            bridge.visit(&list_url(&search.get_untracked(), &order_by, page));
                        }
                    })
                />
            </div>
        </AdminLayout>
    }
}

#[component]
fn UserTableRow(user: UserRow) -> impl IntoView {
    let bridge = use_bridge();

    let edit_url = format!("/admin/users/{}/edit/", user.id);
    let delete_url = format!("/admin/users/{}/delete/", user.id);

    view! {
        <tr class="border-b border-gray-100 last:border-0">
            <td class="px-4 py-3 font-medium">{user.username}</td>
            <td class="px-4 py-3 text-gray-500">{user.email}</td>
            <td class="px-4 py-3"><FlagBadge on=user.is_staff /></td>
            <td class="px-4 py-3"><FlagBadge on=user.is_superuser /></td>
            <td class="px-4 py-3"><FlagBadge on=user.is_active /></td>
            <td class="px-4 py-3 text-right space-x-2">
                <a
                    href=edit_url.clone()
                    class="text-primary-600 hover:underline"
                    on:click=move |ev| {
                        ev.prevent_default();
                        bridge.visit(&edit_url);
                    }
                >
                    "Edit"
                </a>
                <button
                    class="text-red-500 hover:underline"
                    on:click=move |_| bridge.post(&delete_url, json!({}))
                >
                    "Delete"
                </button>
            </td>
        </tr>
    }
}

#[component]
fn FlagBadge(on: bool) -> impl IntoView {
    view! {
        <span class=if on { "text-green-500" } else { "text-gray-300" }>
            {if on { "✓" } else { "—" }}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_props_from_backend_payload() {
        let props: UsersProps = serde_json::from_value(json!({
            "users": [
                {"id": 1, "username": "alice", "email": "a@example.com",
                 "is_staff": true, "is_superuser": false, "is_active": true}
            ],
            "pagination": {"page": 2, "page_size": 25, "total": 51, "total_pages": 3},
            "filters": {"search": "ali", "order_by": "username"}
        }))
        .unwrap();
        assert_eq!(props.users.len(), 1);
        assert_eq!(props.users[0].username, "alice");
        assert_eq!(props.pagination.page, 2);
        assert_eq!(props.filters.search, "ali");
    }

    #[test]
    fn test_props_default_on_empty_payload() {
        let props: UsersProps = serde_json::from_value(json!({})).unwrap();
        assert!(props.users.is_empty());
        assert_eq!(props.pagination.page, 1);
    }

    #[test]
    fn test_list_url() {
        assert_eq!(list_url("", "", 1), "/admin/users/?page=1");
        assert_eq!(
            list_url("ali", "-email", 3),
            "/admin/users/?page=3&search=ali&order_by=-email"
        );
    }
}
