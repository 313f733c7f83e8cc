//! Page Components
//!
//! One module per page component the backend can name. Each exposes a
//! `render` entry for the resolver that deserializes the raw props payload
//! into its DTO; missing or partial props degrade to defaults instead of
//! failing.

use std::collections::HashMap;

use leptos::*;
use serde::Deserialize;

pub mod dashboard;
pub mod group_form;
pub mod groups;
pub mod home;
pub mod login;
pub mod user_form;
pub mod users;

/// Field name -> messages, as the backend reports form errors.
pub type FieldErrors = HashMap<String, Vec<String>>;

/// Messages the backend reported for one form field.
#[component]
pub(crate) fn FieldErrorList(errors: FieldErrors, field: &'static str) -> impl IntoView {
    let messages = errors.get(field).cloned().unwrap_or_default();
    view! {
        <For
            each=move || messages.clone()
            key=|message| message.clone()
            let:message
        >
            <p class="text-sm text-red-500 mt-1">{message}</p>
        </For>
    }
}

/// Shared `auth` prop the backend injects into every authenticated page.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Auth {
    #[serde(default)]
    pub user: Option<AuthUser>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct AuthUser {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub is_staff: bool,
    #[serde(default)]
    pub is_superuser: bool,
}

/// Shared pagination prop on list pages.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Pagination {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub total_pages: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: default_page(),
            page_size: default_page_size(),
            total: 0,
            total_pages: 0,
        }
    }
}

fn default_page() -> u32 {
    1
}

fn default_page_size() -> u32 {
    25
}

/// Shared search/ordering prop on list pages.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Filters {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub order_by: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_auth_defaults_when_props_missing() {
        let auth: Auth = serde_json::from_value(json!({})).unwrap();
        assert_eq!(auth.user, None);
    }

    #[test]
    fn test_auth_user_partial_payload() {
        let auth: Auth =
            serde_json::from_value(json!({"user": {"id": 7, "username": "admin"}})).unwrap();
        let user = auth.user.unwrap();
        assert_eq!(user.id, 7);
        assert_eq!(user.username, "admin");
        assert!(!user.is_superuser);
    }

    #[test]
    fn test_pagination_defaults() {
        let pagination: Pagination = serde_json::from_value(json!({})).unwrap();
        assert_eq!(pagination.page, 1);
        assert_eq!(pagination.page_size, 25);
        assert_eq!(pagination.total, 0);
    }
}
