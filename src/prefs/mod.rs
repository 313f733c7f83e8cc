//! Persisted UI Preferences
//!
//! Each preference is a triple: a value in local storage, a reactive cell
//! shared by every consumer on the page, and (for the theme) a DOM side
//! effect. The cells live in a single `Preferences` context provided once at
//! the App root; `use_theme` / `use_sidebar` hand out store handles and
//! re-sync the cell from storage on every consuming mount, so views mounted
//! after an external storage change still observe it.
//!
//! Every mutation writes through to storage in the same turn it updates the
//! cell. The two never diverge after a completed write.

use leptos::*;

pub mod sidebar;
pub mod theme;

use self::sidebar::SidebarStore;
use self::theme::{Theme, ThemeStore};

/// Reactive cells for all persisted preferences. One per page session,
/// provided at the App root.
#[derive(Clone, Copy)]
pub struct Preferences {
    theme: RwSignal<Theme>,
    sidebar_open: RwSignal<bool>,
}

/// Provide the preference cells to the component tree, seeded from storage.
pub fn provide_preferences() {
    provide_context(Preferences {
        theme: create_rw_signal(theme::read()),
        sidebar_open: create_rw_signal(sidebar::read()),
    });
}

fn use_preferences() -> Preferences {
    use_context::<Preferences>().expect("Preferences not provided")
}

/// Theme store handle. Re-reads storage and re-applies the document class on
/// every call, which is redundant after the pre-paint apply but keeps late
/// mounts consistent.
pub fn use_theme() -> ThemeStore {
    let prefs = use_preferences();
    let current = theme::read();
    // Untracked: the resync runs during the caller's mount, and a tracked
    // set would notify subscribers mid-render.
    prefs.theme.set_untracked(current);
    theme::apply(current);
    ThemeStore::new(prefs.theme)
}

/// Sidebar store handle, re-synced from storage like `use_theme`.
pub fn use_sidebar() -> SidebarStore {
    let prefs = use_preferences();
    prefs.sidebar_open.set_untracked(sidebar::read());
    SidebarStore::new(prefs.sidebar_open)
}
