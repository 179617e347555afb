//! Light/dark theme preference.
//!
//! The persisted form is the literal string `"dark"` or `"light"`, which is
//! also the value written to the root element's theme attribute.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

/// A stored or configured theme string was neither `dark` nor `light`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme '{0}'")]
pub struct ThemeParseError(pub String);

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Theme that a toggle click should switch to, given the recognized
    /// theme currently applied. Only dark flips to light; nothing applied
    /// (or a foreign value) goes to dark.
    #[must_use]
    pub fn next_after(current: Option<Self>) -> Self {
        current.map_or(Self::Dark, Self::toggled)
    }

    /// `aria-pressed` on the toggle reports whether light mode is on.
    #[must_use]
    pub fn pressed(self) -> bool {
        self == Self::Light
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(ThemeParseError(other.to_owned())),
        }
    }
}
