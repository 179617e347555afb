//! Mobile menu open/closed state.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use super::aria_bool;

/// Whether the mobile navigation panel is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    #[must_use]
    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Open => Self::Closed,
            Self::Closed => Self::Open,
        }
    }

    /// Value for `aria-expanded` on the trigger.
    #[must_use]
    pub fn aria_expanded(self) -> &'static str {
        aria_bool(self.is_open())
    }

    /// Value for `aria-hidden` on the panel. Always the negation of
    /// [`Self::aria_expanded`].
    #[must_use]
    pub fn aria_hidden(self) -> &'static str {
        aria_bool(!self.is_open())
    }
}
