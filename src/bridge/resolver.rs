//! Page Resolver
//!
//! Static registry mapping the component names the backend uses to page
//! render functions. Registration is explicit and compile-time; a name the
//! table does not know fails fast with [`PageNotFound`].

use leptos::View;

use crate::pages;

/// Renders a page component from its raw props payload.
pub type PageRender = fn(serde_json::Value) -> View;

/// Raised when the backend names a component this build does not register.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown page component: {0}")]
pub struct PageNotFound(pub String);

/// Every page component, keyed by the name the backend renders with.
static PAGES: &[(&str, PageRender)] = &[
    ("Home", pages::home::render),
    ("Auth/Login", pages::login::render),
    ("Admin/Dashboard", pages::dashboard::render),
    ("Admin/Users/Index", pages::users::render),
    ("Admin/Users/Create", pages::user_form::render),
    ("Admin/Users/Edit", pages::user_form::render),
    ("Admin/Groups/Index", pages::groups::render),
    ("Admin/Groups/Create", pages::group_form::render),
    ("Admin/Groups/Edit", pages::group_form::render),
];

/// Look up the render function for a component name. Synchronous; the error
/// is fatal to the navigation that asked.
pub fn resolve(name: &str) -> Result<PageRender, PageNotFound> {
    PAGES
        .iter()
        .find(|(registered, _)| *registered == name)
        .map(|(_, render)| *render)
        .ok_or_else(|| PageNotFound(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_pages() {
        for name in [
            "Home",
            "Auth/Login",
            "Admin/Dashboard",
            "Admin/Users/Index",
            "Admin/Users/Create",
            "Admin/Users/Edit",
            "Admin/Groups/Index",
            "Admin/Groups/Create",
            "Admin/Groups/Edit",
        ] {
            assert!(resolve(name).is_ok(), "{name} should be registered");
        }
    }

    #[test]
    fn test_resolve_unknown_page() {
        let err = resolve("Admin/Missing").unwrap_err();
        assert_eq!(err, PageNotFound("Admin/Missing".to_string()));
        assert_eq!(err.to_string(), "unknown page component: Admin/Missing");
    }

    #[test]
    fn test_resolve_is_case_sensitive() {
        assert!(resolve("home").is_err());
    }
}
