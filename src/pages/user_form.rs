//! User Form Page
//!
//! Create and edit share one component: the backend sends a `user` prop only
//! when editing, and the form posts back to the matching endpoint. On
//! validation failure the backend re-renders this page with field errors.

use leptos::*;
use serde::Deserialize;
use serde_json::json;

use super::{Auth, FieldErrorList, FieldErrors};
use crate::bridge::use_bridge;
use crate::components::AdminLayout;

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
struct UserFormProps {
    #[serde(default)]
    auth: Auth,
    // Present on edit only.
    #[serde(default)]
    user: Option<UserRef>,
    #[serde(default)]
    form: UserForm,
    #[serde(default)]
    errors: FieldErrors,
    #[serde(default)]
    groups_choices: Vec<GroupChoice>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
struct UserRef {
    #[serde(default)]
    id: i64,
    #[serde(default)]
    username: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
struct UserForm {
    #[serde(default)]
    username: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    first_name: String,
    #[serde(default)]
    last_name: String,
    #[serde(default)]
    is_staff: bool,
    #[serde(default)]
    is_superuser: bool,
    #[serde(default = "default_active")]
    is_active: bool,
    #[serde(default)]
    group_ids: Vec<i64>,
    // Empty means "leave unchanged" on edit.
    #[serde(default)]
    password: String,
}

impl Default for UserForm {
    fn default() -> Self {
        Self {
            username: String::new(),
            email: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            is_staff: false,
            is_superuser: false,
            is_active: default_active(),
            group_ids: Vec::new(),
            password: String::new(),
        }
    }
}

fn default_active() -> bool {
    true
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
struct GroupChoice {
    #[serde(default)]
    id: i64,
    #[serde(default)]
    name: String,
}

pub fn render(props: serde_json::Value) -> View {
    let props: UserFormProps = serde_json::from_value(props).unwrap_or_default();
    view! { <UserFormPage props /> }.into_view()
}

fn action_url(user_id: Option<i64>) -> String {
    match user_id {
        Some(id) => format!("/admin/users/{id}/edit/"),
        None => "/admin/users/create/".to_string(),
    }
}

#[component]
fn UserFormPage(props: UserFormProps) -> impl IntoView {
    let bridge = use_bridge();

    let action = action_url(props.user.as_ref().map(|user| user.id));
    let heading = if props.user.is_some() { "Edit user" } else { "New user" };

    let form = props.form;
    let (username, set_username) = create_signal(form.username);
    let (email, set_email) = create_signal(form.email);
    let (first_name, set_first_name) = create_signal(form.first_name);
    let (last_name, set_last_name) = create_signal(form.last_name);
    let (password, set_password) = create_signal(String::new());
    let (is_staff, set_is_staff) = create_signal(form.is_staff);
    let (is_superuser, set_is_superuser) = create_signal(form.is_superuser);
    let (is_active, set_is_active) = create_signal(form.is_active);
    let group_ids = create_rw_signal(form.group_ids);

    let errors = props.errors;
    let choices = props.groups_choices;

    let submit = {
        let action = action.clone();
        move |ev: ev::SubmitEvent| {
            ev.prevent_default();
            bridge.post(
                &action,
                json!({
                    "username": username.get_untracked(),
                    "email": email.get_untracked(),
                    "first_name": first_name.get_untracked(),
                    "last_name": last_name.get_untracked(),
                    "is_staff": is_staff.get_untracked(),
                    "is_superuser": is_superuser.get_untracked(),
                    "is_active": is_active.get_untracked(),
                    "group_ids": group_ids.get_untracked(),
                    "password": password.get_untracked(),
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

                <TextField label="Username" value=username set_value=set_username
                    errors=errors.clone() field="username" />
                <TextField label="Email" kind="email" value=email set_value=set_email
                    errors=errors.clone() field="email" />
                <TextField label="First name" value=first_name set_value=set_first_name
                    errors=errors.clone() field="first_name" />
                <TextField label="Last name" value=last_name set_value=set_last_name
                    errors=errors.clone() field="last_name" />
                <TextField label="Password" kind="password" value=password set_value=set_password
                    errors=errors.clone() field="password" />

                <div class="space-y-2">
                    <CheckboxField label="Staff" value=is_staff set_value=set_is_staff />
                    <CheckboxField label="Superuser" value=is_superuser set_value=set_is_superuser />
                    <CheckboxField label="Active" value=is_active set_value=set_is_active />
                </div>

                <div>
                    <label class="block text-sm text-gray-500 mb-2">"Groups"</label>
                    <div class="space-y-1">
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
                                            prop:checked=move || group_ids.get().contains(&id)
                                            on:change=move |_| group_ids.update(|ids| {
                                                if ids.contains(&id) {
                                                    ids.retain(|x| *x != id);
                                                } else {
                                                    ids.push(id);
                                                }
                                            })
                                        />
                                        <span>{choice.name.clone()}</span>
                                    </label>
                                }
                            }
                        </For>
                    </div>
                    <FieldErrorList errors field="group_ids" />
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

#[component]
fn TextField(
    label: &'static str,
    #[prop(optional)] kind: Option<&'static str>,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
    errors: FieldErrors,
    field: &'static str,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm text-gray-500 mb-2">{label}</label>
            <input
                type=kind.unwrap_or("text")
                prop:value=move || value.get()
                on:input=move |ev| set_value.set(event_target_value(&ev))
                class="w-full rounded-lg px-4 py-2 border border-gray-300
                       focus:border-primary-500 focus:outline-none"
            />
            <FieldErrorList errors field />
        </div>
    }
}

#[component]
fn CheckboxField(
    label: &'static str,
    value: ReadSignal<bool>,
    set_value: WriteSignal<bool>,
) -> impl IntoView {
    view! {
        <label class="flex items-center space-x-2 text-sm">
            <input
                type="checkbox"
                prop:checked=move || value.get()
                on:change=move |ev| set_value.set(event_target_checked(&ev))
            />
            <span>{label}</span>
        </label>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_action_url() {
        assert_eq!(action_url(None), "/admin/users/create/");
        assert_eq!(action_url(Some(9)), "/admin/users/9/edit/");
    }

    #[test]
    fn test_create_props_have_no_user() {
        let props: UserFormProps = serde_json::from_value(json!({
            "form": {"username": "", "email": "", "is_active": true, "group_ids": []},
            "errors": {},
            "groups_choices": [{"id": 1, "name": "editors"}]
        }))
        .unwrap();
        assert_eq!(props.user, None);
        assert!(props.form.is_active);
        assert_eq!(props.groups_choices[0].name, "editors");
    }

    #[test]
    fn test_edit_props_carry_the_user() {
        let props: UserFormProps = serde_json::from_value(json!({
            "user": {"id": 9, "username": "alice"},
            "form": {"username": "alice", "group_ids": [1, 3]}
        }))
        .unwrap();
        assert_eq!(props.user.as_ref().map(|u| u.id), Some(9));
        assert_eq!(props.form.group_ids, vec![1, 3]);
    }

    #[test]
    fn test_form_defaults_to_active() {
        let form: UserForm = serde_json::from_value(json!({})).unwrap();
        assert!(form.is_active);
        assert!(!form.is_staff);
    }
}
