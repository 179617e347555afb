//! Plain UI state types.
//!
//! DESIGN
//! ======
//! These types hold no element handles. Components own one of each, render
//! it onto the surface, and keep the surface as a mirror rather than the
//! source of truth.

pub mod form;
pub mod menu;
pub mod projects;
pub mod theme;

/// ARIA boolean attributes take the strings `"true"` and `"false"`.
#[must_use]
pub fn aria_bool(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}
