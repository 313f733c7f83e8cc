//! Server-Driven Page Bridge
//!
//! The backend owns routing: every response is a page payload naming a
//! component plus its props. The client reads the first payload from the
//! mount element, then swaps payloads on navigation by fetching with the
//! bridge headers set. There is no client-side route table and no way to
//! abort an in-flight visit.

use gloo_net::http::Method;
use leptos::*;
use serde::Deserialize;
use wasm_bindgen::JsCast;

use crate::api::client;

pub mod resolver;

/// Id of the DOM element the backend renders the payload into and the app
/// mounts over.
pub const MOUNT_ELEMENT_ID: &str = "app";

/// Attribute on the mount element carrying the initial page payload.
const PAGE_ATTRIBUTE: &str = "data-page";

/// Header marking a request as a bridge navigation.
const BRIDGE_HEADER: &str = "X-Inertia";
/// Header carrying the asset version the client was built against.
const VERSION_HEADER: &str = "X-Inertia-Version";
/// Header on a 409 response naming the URL to hard-reload to.
const LOCATION_HEADER: &str = "X-Inertia-Location";

/// One server-rendered page: which component to mount and the props to hand
/// it.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Page {
    pub component: String,
    #[serde(default)]
    pub props: serde_json::Value,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub version: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("mount element #{MOUNT_ELEMENT_ID} not found in document")]
    MountMissing,
    #[error("mount element has no {PAGE_ATTRIBUTE} payload")]
    PayloadMissing,
    #[error("invalid page payload: {0}")]
    InvalidPayload(String),
    #[error("request failed: {0}")]
    Request(String),
    #[error("asset version changed, full reload forced")]
    StaleVersion,
}

/// The element the app mounts into.
pub fn mount_element() -> Result<web_sys::HtmlElement, BridgeError> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(MOUNT_ELEMENT_ID))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        .ok_or(BridgeError::MountMissing)
}

/// Read and parse the initial payload the backend rendered into the mount
/// element. Synchronous; runs before anything mounts.
pub fn initial_page() -> Result<Page, BridgeError> {
    let raw = mount_element()?
        .get_attribute(PAGE_ATTRIBUTE)
        .ok_or(BridgeError::PayloadMissing)?;
    parse_page(&raw)
}

/// Parse a page payload from its JSON form.
pub fn parse_page(raw: &str) -> Result<Page, BridgeError> {
    serde_json::from_str(raw).map_err(|e| BridgeError::InvalidPayload(e.to_string()))
}

/// Bridge context: the current page as a reactive cell, plus navigation
/// entry points. Provided once at the App root.
#[derive(Clone, Copy)]
pub struct Bridge {
    page: RwSignal<Page>,
}

impl Bridge {
    pub fn new(initial: Page) -> Self {
        Self {
            page: create_rw_signal(initial),
        }
    }

    /// The current page, tracked reactively.
    pub fn current(&self) -> Page {
        self.page.get()
    }

    /// URL of the current page, tracked reactively.
    pub fn url(&self) -> String {
        self.page.with(|p| p.url.clone())
    }

    /// Navigate by GET. The new payload replaces the current page when it
    /// arrives; a failed visit leaves the current page mounted.
    pub fn visit(&self, url: &str) {
        self.exchange(Method::GET, url, None);
    }

    /// Submit a form by POST with a JSON body. The backend answers with the
    /// next page payload (re-rendered form on errors, target page on
    /// success).
    pub fn post(&self, url: &str, body: serde_json::Value) {
        self.exchange(Method::POST, url, Some(body));
    }

    fn exchange(&self, method: Method, url: &str, body: Option<serde_json::Value>) {
        let page = self.page;
        let version = page.with_untracked(|p| p.version.clone());
        let url = url.to_string();
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_page(method, &url, version.as_deref(), body.as_ref()).await {
                Ok(next) => {
                    // An unknown component is fatal to this navigation only.
                    if let Err(err) = resolver::resolve(&next.component) {
                        log::error!("visit {url}: {err}");
                        return;
                    }
                    page.set(next);
                }
                Err(BridgeError::StaleVersion) => {}
                Err(err) => log::error!("visit {url}: {err}"),
            }
        });
    }
}

/// Access the bridge from any component under the App root.
pub fn use_bridge() -> Bridge {
    use_context::<Bridge>().expect("Bridge not provided")
}

async fn fetch_page(
    method: Method,
    url: &str,
    version: Option<&str>,
    body: Option<&serde_json::Value>,
) -> Result<Page, BridgeError> {
    let mut builder = client::request(method, url)
        .header(BRIDGE_HEADER, "true")
        .header("Accept", "application/json");
    if let Some(version) = version {
        builder = builder.header(VERSION_HEADER, version);
    }

    let request = match body {
        Some(body) => builder
            .json(body)
            .map_err(|e| BridgeError::Request(e.to_string()))?,
        None => builder
            .build()
            .map_err(|e| BridgeError::Request(e.to_string()))?,
    };
    let response = request
        .send()
        .await
        .map_err(|e| BridgeError::Request(e.to_string()))?;

    if response.status() == 409 {
        // The server's asset version moved on; fall back to a full browser
        // navigation.
        let location = response
            .headers()
            .get(LOCATION_HEADER)
            .unwrap_or_else(|| url.to_string());
        force_reload(&location);
        return Err(BridgeError::StaleVersion);
    }
    if !response.ok() {
        return Err(BridgeError::Request(format!(
            "{} returned {}",
            url,
            response.status()
        )));
    }

    let raw = response
        .text()
        .await
        .map_err(|e| BridgeError::Request(e.to_string()))?;
    parse_page(&raw)
}

fn force_reload(url: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(url);
    }
}
