//! Light/dark theme preference.
//!
//! The preference is persisted as `"light"` or `"dark"`; anything else (or
//! nothing) reads as dark. Applying a theme always writes both the root
//! class and the indicator icon, so the page never shows a mixed state.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::consts::{DARK_ICON_CLASS, LIGHT_ICON_CLASS};
use crate::util::storage::KeyValueStore;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a persisted value. Exact match only.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// What the page should show for this theme.
    pub fn appearance(self) -> Appearance {
        match self {
            Self::Light => Appearance { light_mode: true, icon: LIGHT_ICON_CLASS, hidden_icon: DARK_ICON_CLASS },
            Self::Dark => Appearance { light_mode: false, icon: DARK_ICON_CLASS, hidden_icon: LIGHT_ICON_CLASS },
        }
    }
}

/// Visual state derived from a [`Theme`]: the root `light-mode` class and
/// which of the two icon classes is present.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Appearance {
    pub light_mode: bool,
    pub icon: &'static str,
    pub hidden_icon: &'static str,
}

/// Where a theme is rendered.
pub trait ThemeSurface {
    fn show(&self, appearance: Appearance);
}

/// Owns the current preference and its persisted copy.
pub struct ThemeStore<S> {
    store: S,
    key: String,
    current: Theme,
}

impl<S: KeyValueStore> ThemeStore<S> {
    /// Open the preference stored under `key`.
    pub fn open(store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let current = read(&store, &key);
        Self { store, key, current }
    }

    /// Read the persisted preference, defaulting to dark.
    pub fn load(&self) -> Theme {
        read(&self.store, &self.key)
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn apply(&self, surface: &impl ThemeSurface) {
        surface.show(self.current.appearance());
    }

    /// Flip the preference, show it, and persist it.
    ///
    /// A failed write is logged; the page still flips for this session.
    pub fn toggle(&mut self, surface: &impl ThemeSurface) -> Theme {
        self.current = self.current.toggled();
        self.apply(surface);
        if let Err(err) = self.store.set(&self.key, self.current.as_str()) {
            log::warn!("theme preference not saved: {err}");
        }
        self.current
    }
}

fn read(store: &impl KeyValueStore, key: &str) -> Theme {
    match store.get(key) {
        Ok(Some(raw)) => Theme::parse(&raw).unwrap_or_else(|| {
            log::debug!("ignoring unknown theme '{raw}'");
            Theme::default()
        }),
        Ok(None) => Theme::default(),
        Err(err) => {
            log::warn!("theme preference unreadable: {err}");
            Theme::default()
        }
    }
}
