//! Shared HTTP Client
//!
//! Thin layer over `gloo-net` so that every outgoing request automatically
//! carries the backend's CSRF token: the value of a named cookie is echoed
//! back in a named header. Configured exactly once at startup; configuration
//! itself performs no request.

use std::cell::RefCell;

use gloo_net::http::{Method, RequestBuilder};
use wasm_bindgen::JsCast;

/// CSRF behavior of the shared client. Fixed constants in practice; the
/// defaults match the backend's cookie and header names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub xsrf_cookie_name: &'static str,
    pub xsrf_header_name: &'static str,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            xsrf_cookie_name: "csrftoken",
            xsrf_header_name: "X-CSRFToken",
        }
    }
}

thread_local! {
    static CONFIG: RefCell<ClientConfig> = RefCell::new(ClientConfig::default());
}

/// Install the client configuration. Called once during bootstrap, before any
/// request is built.
pub fn configure(config: ClientConfig) {
    CONFIG.with(|c| *c.borrow_mut() = config);
}

fn config() -> ClientConfig {
    CONFIG.with(|c| c.borrow().clone())
}

/// The current CSRF token, read from the configured cookie. `None` when the
/// cookie is absent, in which case requests go out without the header.
pub fn csrf_token() -> Option<String> {
    let cookies = web_sys::window()?
        .document()?
        .dyn_into::<web_sys::HtmlDocument>()
        .ok()?
        .cookie()
        .ok()?;
    token_from_cookies(&cookies, config().xsrf_cookie_name)
}

fn token_from_cookies(cookies: &str, name: &str) -> Option<String> {
    cookies.split(';').map(str::trim).find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key == name).then(|| value.to_string())
    })
}

/// Build a request with the CSRF header attached when the token cookie is
/// present. All bridge traffic and form submissions go through here.
pub fn request(method: Method, url: &str) -> RequestBuilder {
    let builder = RequestBuilder::new(url).method(method);
    match csrf_token() {
        Some(token) => builder.header(config().xsrf_header_name, &token),
        None => builder,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_from_cookies() {
        let cookies = "sessionid=abc123; csrftoken=tok-42; other=x";
        assert_eq!(
            token_from_cookies(cookies, "csrftoken"),
            Some("tok-42".to_string())
        );
    }

    #[test]
    fn test_token_from_cookies_single_cookie() {
        assert_eq!(
            token_from_cookies("csrftoken=only", "csrftoken"),
            Some("only".to_string())
        );
    }

    #[test]
    fn test_token_missing() {
        assert_eq!(token_from_cookies("sessionid=abc123", "csrftoken"), None);
        assert_eq!(token_from_cookies("", "csrftoken"), None);
    }

    #[test]
    fn test_token_name_is_exact() {
        // `xcsrftoken` must not match `csrftoken`.
        assert_eq!(token_from_cookies("xcsrftoken=nope", "csrftoken"), None);
    }

    #[test]
    fn test_default_config_names() {
        let config = ClientConfig::default();
        assert_eq!(config.xsrf_cookie_name, "csrftoken");
        assert_eq!(config.xsrf_header_name, "X-CSRFToken");
    }
}
