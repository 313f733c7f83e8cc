//! Login Page
//!
//! Mirrors the backend's admin login form. The form posts through the bridge;
//! on failure the backend re-renders this page with field errors and the
//! submitted username, on success it redirects to the requested page.

use leptos::*;
use serde::Deserialize;
use serde_json::json;

use super::{FieldErrorList, FieldErrors};
use crate::bridge::use_bridge;

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
struct LoginProps {
    #[serde(default)]
    form: LoginForm,
    #[serde(default)]
    errors: FieldErrors,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
struct LoginForm {
    #[serde(default)]
    username: String,
    // The backend never echoes the password back.
    #[serde(default)]
    password: String,
    #[serde(default)]
    next: String,
}

pub fn render(props: serde_json::Value) -> View {
    let props: LoginProps = serde_json::from_value(props).unwrap_or_default();
    view! { <LoginPage props /> }.into_view()
}

#[component]
fn LoginPage(props: LoginProps) -> impl IntoView {
    let bridge = use_bridge();

    let (username, set_username) = create_signal(props.form.username.clone());
    let (password, set_password) = create_signal(String::new());
    let next = props.form.next.clone();
    let errors = props.errors;

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        bridge.post(
            "/admin/login/",
            json!({
                "username": username.get_untracked(),
                "password": password.get_untracked(),
                "next": next,
            }),
        );
    };

    view! {
        <div class="min-h-screen flex items-center justify-center px-4">
            <form
                class="w-full max-w-sm rounded-xl border border-gray-200 p-8 space-y-6"
                on:submit=submit
            >
                <h1 class="text-2xl font-bold text-center">"Sign in"</h1>

                <FieldErrorList errors=errors.clone() field="__all__" />

                <div>
                    <label class="block text-sm text-gray-500 mb-2">"Username"</label>
                    <input
                        type="text"
                        autocomplete="username"
                        prop:value=move || username.get()
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                        class="w-full rounded-lg px-4 py-3 border border-gray-300
                               focus:border-primary-500 focus:outline-none"
                    />
                    <FieldErrorList errors=errors.clone() field="username" />
                </div>

                <div>
                    <label class="block text-sm text-gray-500 mb-2">"Password"</label>
                    <input
                        type="password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                        class="w-full rounded-lg px-4 py-3 border border-gray-300
                               focus:border-primary-500 focus:outline-none"
                    />
                    <FieldErrorList errors=errors field="password" />
                </div>

                <button
                    type="submit"
                    class="w-full px-4 py-3 bg-primary-600 hover:bg-primary-700 text-white
                           rounded-lg font-medium transition-colors"
                >
                    "Sign in"
                </button>
            </form>
        </div>
    }
}
