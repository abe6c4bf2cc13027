//! Theme Preference
//!
//! Light/dark preference applied to the document and persisted in storage.

use crate::storage::KeyValueStorage;

/// Storage key for the persisted preference.
pub const THEME_KEY: &str = "theme";

/// The two supported color schemes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// The value persisted to storage and written to `data-theme`.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    fn from_stored(value: &str) -> Option<Theme> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    /// The other theme.
    pub fn flipped(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Owns the theme preference and its persistence.
pub struct ThemeController<S: KeyValueStorage> {
    theme: Theme,
    storage: S,
}

impl<S: KeyValueStorage> ThemeController<S> {
    /// Seed the preference from storage, defaulting to light when the key
    /// is absent or holds an unrecognized value, and persist the result.
    pub fn restore(storage: S) -> Self {
        let theme = storage
            .get(THEME_KEY)
            .as_deref()
            .and_then(Theme::from_stored)
            .unwrap_or(Theme::Light);

        let controller = Self { theme, storage };
        controller.apply();
        controller
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Persist the current preference.
    pub fn apply(&self) {
        self.storage.set(THEME_KEY, self.theme.as_str());
    }

    /// Flip between light and dark and persist the new preference.
    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.flipped();
        self.apply();
        self.theme
    }
}

/// Write the theme onto `<html data-theme="...">` so the stylesheet's
/// variables switch.
pub fn apply_document_theme(theme: Theme) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());

    if let Some(root) = root {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn defaults_to_light_with_empty_storage() {
        let controller = ThemeController::restore(MemoryStorage::default());
        assert_eq!(controller.theme(), Theme::Light);
    }

    #[test]
    fn restores_persisted_preference() {
        let storage = MemoryStorage::default();
        storage.set(THEME_KEY, "dark");

        let controller = ThemeController::restore(storage.clone());
        assert_eq!(controller.theme(), Theme::Dark);

        storage.set(THEME_KEY, "light");
        let controller = ThemeController::restore(storage);
        assert_eq!(controller.theme(), Theme::Light);
    }

    #[test]
    fn falls_back_to_light_on_unrecognized_value() {
        let storage = MemoryStorage::default();
        storage.set(THEME_KEY, "solarized");

        let controller = ThemeController::restore(storage.clone());
        assert_eq!(controller.theme(), Theme::Light);
        // restore() re-persists the effective value
        assert_eq!(storage.get(THEME_KEY), Some("light".to_string()));
    }

    #[test]
    fn toggle_persists_and_double_toggle_is_identity() {
        let storage = MemoryStorage::default();
        let mut controller = ThemeController::restore(storage.clone());

        assert_eq!(controller.toggle(), Theme::Dark);
        assert_eq!(storage.get(THEME_KEY), Some("dark".to_string()));

        assert_eq!(controller.toggle(), Theme::Light);
        assert_eq!(storage.get(THEME_KEY), Some("light".to_string()));
    }
}
