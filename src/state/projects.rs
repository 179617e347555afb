//! Active project selection.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

/// Identifier of the project whose preview is showing, if any.
///
/// Starts empty; once something is selected there is always exactly one
/// active id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectSelection {
    active: Option<String>,
}

impl ProjectSelection {
    #[must_use]
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    #[must_use]
    pub fn is_active(&self, id: &str) -> bool {
        self.active.as_deref() == Some(id)
    }

    /// Make `id` the active project. Returns `false` if it already was.
    pub fn select(&mut self, id: &str) -> bool {
        if self.is_active(id) {
            return false;
        }
        self.active = Some(id.to_owned());
        true
    }
}
