//! Colour theme preference
//!
//! Persisted separately from the board in LocalStorage.

use crate::consts::THEME_KEY;
use crate::persistence::{KeyValueStore, StorageError};

/// Light or dark page theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Only a saved "dark" forces dark; with nothing saved the OS preference wins
    pub fn resolve(saved: Option<&str>, prefers_dark: bool) -> Self {
        match saved {
            Some("dark") => Theme::Dark,
            None if prefers_dark => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        *self == Theme::Dark
    }

    /// Load the saved theme, falling back to the OS preference
    pub fn load<S: KeyValueStore + ?Sized>(store: &S, prefers_dark: bool) -> Self {
        let saved = store.get(THEME_KEY).ok().flatten();
        let theme = Self::resolve(saved.as_deref(), prefers_dark);
        log::info!("Using {} theme", theme.as_str());
        theme
    }

    pub fn save<S: KeyValueStore + ?Sized>(&self, store: &mut S) -> Result<(), StorageError> {
        store.set(THEME_KEY, self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;

    #[test]
    fn test_resolve() {
        assert_eq!(Theme::resolve(Some("dark"), false), Theme::Dark);
        assert_eq!(Theme::resolve(Some("light"), true), Theme::Light);
        assert_eq!(Theme::resolve(None, true), Theme::Dark);
        assert_eq!(Theme::resolve(None, false), Theme::Light);
        // Unknown values are treated as an explicit non-dark choice
        assert_eq!(Theme::resolve(Some("sepia"), true), Theme::Light);
    }

    #[test]
    fn test_toggle_and_persist() {
        let mut store = MemoryStore::new();
        let theme = Theme::load(&store, false).toggled();
        assert!(theme.is_dark());
        theme.save(&mut store).unwrap();

        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
        assert_eq!(Theme::load(&store, false), Theme::Dark);
    }
}
