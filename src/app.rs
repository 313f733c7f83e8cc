//! App Root Component
//!
//! Provides the preference and bridge contexts, then renders whatever page
//! the bridge currently holds through the resolver.

use leptos::*;

use crate::bridge::{resolver, Bridge, Page};
use crate::prefs;

/// Root application component. Re-renders the mounted page whenever the
/// bridge swaps payloads.
#[component]
pub fn App(initial: Page) -> impl IntoView {
    prefs::provide_preferences();

    let bridge = Bridge::new(initial);
    provide_context(bridge);

    view! {
        {move || {
            let page = bridge.current();
            match resolver::resolve(&page.component) {
                Ok(render) => render(page.props),
                // The bootstrap checks the initial component and `visit`
                // checks every subsequent one, so this only fires if the
                // registry changes underneath us.
                Err(err) => {
                    log::error!("{err}");
                    ().into_view()
                }
            }
        }}
    }
}
