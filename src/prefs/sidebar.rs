//! Sidebar Preference
//!
//! Whether the admin sidebar is expanded, persisted under
//! `admin-sidebar-open`. No DOM side effect; layout components read the
//! boolean.

use leptos::*;

/// Local storage key for the persisted sidebar state.
pub const STORAGE_KEY: &str = "admin-sidebar-open";

/// Total parse of the stored value. Only the literal strings `"true"` and
/// `"false"` count as explicit choices; anything else means open.
pub fn parse_stored(raw: Option<&str>) -> bool {
    match raw {
        Some("false") => false,
        Some("true") => true,
        _ => true,
    }
}

/// Read the persisted sidebar state. Total: storage failures mean open.
pub fn read() -> bool {
    parse_stored(stored_value().as_deref())
}

fn stored_value() -> Option<String> {
    web_sys::window()?.local_storage().ok()??.get_item(STORAGE_KEY).ok()?
}

fn write(open: bool) {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok()).flatten() {
        let _ = storage.set_item(STORAGE_KEY, if open { "true" } else { "false" });
    }
}

/// Handle over the shared sidebar cell. `toggle` writes the new value through
/// to storage in the same turn.
#[derive(Clone, Copy)]
pub struct SidebarStore {
    cell: RwSignal<bool>,
}

impl SidebarStore {
    pub(super) fn new(cell: RwSignal<bool>) -> Self {
        Self { cell }
    }

    /// Whether the sidebar is open, tracked reactively.
    pub fn open(&self) -> bool {
        self.cell.get()
    }

    pub fn toggle(&self) {
        let next = !self.cell.get_untracked();
        self.cell.set(next);
        write(next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_stored_explicit_values() {
        assert!(parse_stored(Some("true")));
        assert!(!parse_stored(Some("false")));
    }

    #[test]
    fn test_parse_stored_defaults_to_open() {
        assert!(parse_stored(None));
        assert!(parse_stored(Some("")));
        assert!(parse_stored(Some("True")));
        assert!(parse_stored(Some("FALSE")));
        assert!(parse_stored(Some("1")));
        assert!(parse_stored(Some("yes")));
    }
}
