//! Light/dark/system theme preference.

use std::rc::Rc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::THEME_KEY;
use crate::store::schema::literal;
use crate::store::{KeyValueStorage, LocalCache, ValidationError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

pub const ALL_THEMES: [Theme; 3] = [Theme::Light, Theme::Dark, Theme::System];

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
            Theme::System => "System",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        ALL_THEMES.into_iter().find(|t| t.as_str() == s)
    }
}

/// The theme actually applied to the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectiveTheme {
    Light,
    Dark,
}

impl EffectiveTheme {
    pub fn is_dark(self) -> bool {
        self == EffectiveTheme::Dark
    }
}

/// `"light" | "dark" | "system"`
pub fn theme_schema(value: &Value) -> Result<Theme, ValidationError> {
    literal(
        value,
        &[
            ("light", Theme::Light),
            ("dark", Theme::Dark),
            ("system", Theme::System),
        ],
    )
}

pub struct ThemeStore {
    preference: LocalCache<Theme>,
}

impl ThemeStore {
    pub fn load(storage: Rc<dyn KeyValueStorage>) -> Self {
        Self {
            preference: LocalCache::<Theme>::load_validated(
                storage,
                THEME_KEY,
                Theme::System,
                &theme_schema,
            ),
        }
    }

    pub fn theme(&self) -> Theme {
        *self.preference.get()
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.preference.set(theme);
    }

    /// Resolve `System` from the caller's `prefers-color-scheme: dark` match.
    pub fn effective(&self, prefers_dark: bool) -> EffectiveTheme {
        match self.theme() {
            Theme::Light => EffectiveTheme::Light,
            Theme::Dark => EffectiveTheme::Dark,
            Theme::System if prefers_dark => EffectiveTheme::Dark,
            Theme::System => EffectiveTheme::Light,
        }
    }
}
