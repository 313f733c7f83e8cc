//! Groups List Page
//!
//! Paginated, searchable group table with member and permission counts.

use leptos::*;
use serde::Deserialize;
use serde_json::json;

use super::{Auth, Filters, Pagination};
use crate::bridge::use_bridge;
use crate::components::{AdminLayout, Pager};

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
struct GroupsProps {
    #[serde(default)]
    auth: Auth,
    #[serde(default)]
    groups: Vec<GroupRow>,
    #[serde(default)]
    pagination: Pagination,
    #[serde(default)]
    filters: Filters,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
struct GroupRow {
    #[serde(default)]
    id: i64,
    #[serde(default)]
    name: String,
    #[serde(default)]
    user_count: u64,
    #[serde(default)]
    permission_count: u64,
}

pub fn render(props: serde_json::Value) -> View {
    let props: GroupsProps = serde_json::from_value(props).unwrap_or_default();
    view! { <GroupsPage props /> }.into_view()
}

fn list_url(search: &str, order_by: &str, page: u32) -> String {
    let mut url = format!("/admin/groups/?page={page}");
    if !search.is_empty() {
        url.push_str(&format!("&search={search}"));
    }
    if !order_by.is_empty() {
        url.push_str(&format!("&order_by={order_by}"));
    }
    url
}

#[component]
fn GroupsPage(props: GroupsProps) -> impl IntoView {
    let bridge = use_bridge();

    let order_by = props.filters.order_by.clone();
    let (search, set_search) = create_signal(props.filters.search.clone());

    let submit = {
        let order_by = order_by.clone();
        move |ev: ev::SubmitEvent| {
            ev.prevent_default();
            bridge.visit(&list_url(&search.get_untracked(), &order_by, 1));
        }
    };

    let groups = props.groups;
    let pagination = props.pagination;

    view! {
        <AdminLayout auth=props.auth>
            <div class="space-y-6">
                <div class="flex items-center justify-between">
                    <div>
                        <h1 class="text-3xl font-bold">"Groups"</h1>
                        <p class="text-gray-500 mt-1">
                            {format!("{} total", pagination.total)}
                        </p>
                    </div>
                    <button
                        class="px-4 py-2 bg-primary-600 hover:bg-primary-700 text-white
                               rounded-lg font-medium transition-colors"
                        on:click=move |_| bridge.visit("/admin/groups/create/")
                    >
                        "New group"
                    </button>
                </div>

                <form class="flex space-x-2" on:submit=submit>
                    <input
                        type="text"
                        placeholder="Search by name"
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

                <div class="overflow-x-auto rounded-xl border border-gray-200">
                    <table class="w-full text-left">
                        <thead class="border-b border-gray-200 text-sm text-gray-500">
                            <tr>
                                <th class="px-4 py-3">"Name"</th>
                                <th class="px-4 py-3">"Members"</th>
                                <th class="px-4 py-3">"Permissions"</th>
                                <th class="px-4 py-3"></th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || groups.clone()
                                key=|group| group.id
                                let:group
                            >
                                <GroupTableRow group />
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
fn GroupTableRow(group: GroupRow) -> impl IntoView {
    let bridge = use_bridge();

    let edit_url = format!("/admin/groups/{}/edit/", group.id);
    let delete_url = format!("/admin/groups/{}/delete/", group.id);

    view! {
        <tr class="border-b border-gray-100 last:border-0">
            <td class="px-4 py-3 font-medium">{group.name}</td>
            <td class="px-4 py-3 text-gray-500">{group.user_count}</td>
            <td class="px-4 py-3 text-gray-500">{group.permission_count}</td>
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

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_props_from_backend_payload() {
        let props: GroupsProps = serde_json::from_value(json!({
            "groups": [
                {"id": 4, "name": "editors", "user_count": 12, "permission_count": 7}
            ],
            "pagination": {"page": 1, "page_size": 25, "total": 1, "total_pages": 1},
            "filters": {"search": "", "order_by": "name"}
        }))
        .unwrap();
        assert_eq!(props.groups.len(), 1);
        assert_eq!(props.groups[0].name, "editors");
        assert_eq!(props.groups[0].user_count, 12);
    }

    #[test]
    fn test_list_url() {
        assert_eq!(list_url("", "name", 2), "/admin/groups/?page=2&order_by=name");
    }
}
