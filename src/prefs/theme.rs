//! Color Theme Preference
//!
//! Light/dark theme persisted under `admin-theme`. The dark variant is
//! expressed as a `dark` class on the document root element, which the
//! stylesheet keys off.

use leptos::*;

/// Local storage key for the persisted theme.
pub const STORAGE_KEY: &str = "admin-theme";

/// Class toggled on `document.documentElement` when the theme is dark.
const DARK_CLASS: &str = "dark";

/// The two supported color themes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The string form written to storage.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse an exact theme name. `None` for anything outside the enum.
    pub fn parse(raw: &str) -> Option<Theme> {
        match raw {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    /// Total parse of whatever storage holds: `"dark"` is dark, absent or
    /// unparseable content falls back to light.
    pub fn from_stored(raw: Option<&str>) -> Theme {
        match raw {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    /// The other theme.
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Read the persisted theme. Total: any storage failure means light.
pub fn read() -> Theme {
    Theme::from_stored(stored_value().as_deref())
}

fn stored_value() -> Option<String> {
    web_sys::window()?.local_storage().ok()??.get_item(STORAGE_KEY).ok()?
}

fn write(theme: Theme) {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok()).flatten() {
        let _ = storage.set_item(STORAGE_KEY, theme.as_str());
    }
}

/// Sync the `dark` class on the document root with the given theme.
/// Idempotent; safe to call redundantly.
pub fn apply(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let classes = root.class_list();
    let _ = match theme {
        Theme::Dark => classes.add_1(DARK_CLASS),
        Theme::Light => classes.remove_1(DARK_CLASS),
    };
}

/// Direct storage read + apply. Called by the bootstrap before the first
/// paint, bypassing the reactive cell.
pub fn apply_saved() {
    apply(read());
}

/// Handle over the shared theme cell. Mutations write through to storage and
/// the document class in the same turn.
#[derive(Clone, Copy)]
pub struct ThemeStore {
    cell: RwSignal<Theme>,
}

impl ThemeStore {
    pub(super) fn new(cell: RwSignal<Theme>) -> Self {
        Self { cell }
    }

    /// Current theme, tracked reactively.
    pub fn get(&self) -> Theme {
        self.cell.get()
    }

    pub fn set(&self, theme: Theme) {
        self.cell.set(theme);
        write(theme);
        apply(theme);
    }

    /// Set from a raw string, e.g. a select control's value. Unknown values
    /// are silently ignored.
    pub fn set_raw(&self, raw: &str) {
        if let Some(theme) = Theme::parse(raw) {
            self.set(theme);
        }
    }

    pub fn toggle(&self) {
        self.set(self.cell.get_untracked().toggled());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_stored_defaults_to_light() {
        assert_eq!(Theme::from_stored(None), Theme::Light);
        assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("DARK")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("solarized")), Theme::Light);
    }

    #[test]
    fn test_from_stored_dark() {
        assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
    }

    #[test]
    fn test_parse_rejects_unknown_values() {
        assert_eq!(Theme::parse("light"), Some(Theme::Light));
        assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
        assert_eq!(Theme::parse("Dark"), None);
        assert_eq!(Theme::parse("blue"), None);
    }

    #[test]
    fn test_toggle_is_an_involution() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(theme.toggled().toggled(), theme);
            assert_ne!(theme.toggled(), theme);
        }
    }

    #[test]
    fn test_round_trips_through_storage_form() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(Theme::from_stored(Some(theme.as_str())), theme);
        }
    }
}
