//! Page behaviours, one module per piece of markup they drive.
//!
//! ARCHITECTURE
//! ============
//! Each component looks up its elements at install time and returns `None`
//! (or a zero count) when they are absent, so a page that omits a section
//! simply doesn't get that behaviour. Components that hold state are
//! returned as `Rc` handles; their listeners keep a clone alive.

pub mod contact_form;
pub mod footer_year;
pub mod header;
pub mod nav;
pub mod project_switcher;
pub mod smooth_scroll;
pub mod theme_toggle;

#[cfg(test)]
pub(crate) mod test_page;
