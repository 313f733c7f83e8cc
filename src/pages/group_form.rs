//! Group Form Page
//!
//! Create and edit share one component: the backend sends a `group` prop only
//! when editing. Permission membership is a checkbox list over the choices
//! the backend supplies.

use leptos::*;
use serde::Deserialize;
use serde_json::json;

use super::{Auth, FieldErrorList, FieldErrors};
use crate::bridge::use_bridge;
use crate::components::AdminLayout;

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
struct GroupFormProps {
    #[serde(default)]
    auth: Auth,
    // Present on edit only.
    #[serde(default)]
    group: Option<GroupRef>,
    #[serde(default)]
    form: GroupForm,
    #[serde(default)]
    errors: FieldErrors,
    #[serde(default)]
    permissions_choices: Vec<PermissionChoice>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
struct GroupRef {
    #[serde(default)]
    id: i64,
    #[serde(default)]
    name: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
struct GroupForm {
    #[serde(default)]
    name: String,
    #[serde(default)]
    permission_ids: Vec<i64>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
struct PermissionChoice {
    #[serde(default)]
    id: i64,
    #[serde(default)]
    codename: String,
}

pub fn render(props: serde_json::Value) -> View {
    let props: GroupFormProps = serde_json::from_value(props).unwrap_or_default();
    view! { <GroupFormPage props /> }.into_view()
}

fn action_url(group_id: Option<i64>) -> String {
    match group_id {
        Some(id) => format!("/admin/groups/{id}/edit/"),
        None => "/admin/groups/create/".to_string(),
    }
}

#[component]
fn GroupFormPage(props: GroupFormProps) -> impl IntoView {
    let bridge = use_bridge();

    let action = action_url(props.group.as_ref().map(|group| group.id));
    let heading = if props.group.is_some() { "Edit group" } else { "New group" };

    let (name, set_name) = create_signal(props.form.name);
    let permission_ids = create_rw_signal(props.form.permission_ids);

    let errors = props.errors;
    let choices = props.permissions_choices;

    let submit = {
        let action = action.clone();
        move |ev: ev::SubmitEvent| {
            ev.prevent_default();
            bridge.post(
                &action,
                json!({
                    "name": name.get_untracked(),
                    "permission_ids": permission_ids.get_untracked(),
                }),
            );
        }
    };

    view! {
        <AdminLayout auth=props.auth>
            <form class="max-w-lg space-y-6" on:submit=submit>
                <div>
                    <h1 class="text-3xl font-bold">{heading}</h1>
                </div>

                <FieldErrorList errors=errors.clone() field="__all__" />

                <div>
                    <label class="block text-sm text-gray-500 mb-2">"Name"</label>
                    <input
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                        class="w-full rounded-lg px-4 py-2 border border-gray-300
                               focus:border-primary-500 focus:outline-none"
                    />
                    <FieldErrorList errors=errors.clone() field="name" />
                </div>

                <div>
                    <label class="block text-sm text-gray-500 mb-2">"Permissions"</label>
                    <div class="space-y-1 max-h-64 overflow-y-auto">
                        <For
                            each=move || choices.clone()
                            key=|choice| choice.id
                            let:choice
                        >
                            {
                                let id = choice.id;
                                view! {
                                    <label class="flex items-center space-x-2 text-sm">
                                        <input
                                            type="checkbox"
                                            prop:checked=move || permission_ids.get().contains(&id)
                                            on:change=move |_| permission_ids.update(|ids| {
                                                if ids.contains(&id) {
                                                    ids.retain(|x| *x != id);
                                                } else {
                                                    ids.push(id);
                                                }
                                            })
                                        />
                                        <span class="font-mono">{choice.codename.clone()}</span>
                                    </label>
                                }
                            }
                        </For>
                    </div>
                    <FieldErrorList errors field="permission_ids" />
                </div>

                <button
                    type="submit"
                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700 text-white
                           rounded-lg font-medium transition-colors"
                >
                    "Save"
                </button>
            </form>
        </AdminLayout>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_action_url() {
        assert_eq!(action_url(None), "/admin/groups/create/");
        assert_eq!(action_url(Some(4)), "/admin/groups/4/edit/");
    }

    #[test]
    fn test_edit_props_carry_the_group() {
        let props: GroupFormProps = serde_json::from_value(json!({
            "group": {"id": 4, "name": "editors"},
            "form": {"name": "editors", "permission_ids": [2, 5]},
            "permissions_choices": [{"id": 2, "codename": "add_user"}]
        }))
        .unwrap();
        assert_eq!(props.group.as_ref().map(|g| g.id), Some(4));
        assert_eq!(props.form.permission_ids, vec![2, 5]);
        assert_eq!(props.permissions_choices[0].codename, "add_user");
    }

    #[test]
    fn test_create_props_have_no_group() {
        let props: GroupFormProps = serde_json::from_value(json!({
            "form": {"name": "", "permission_ids": []}
        }))
        .unwrap();
        assert_eq!(props.group, None);
        assert!(props.form.permission_ids.is_empty());
    }
}
