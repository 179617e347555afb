//! Page wiring errors.
//!
//! None of these are fatal. Components report them through the log and keep
//! the rest of the page working; the variants exist so the messages are
//! uniform and tests can assert on the policy decisions.

use crate::config::ConfigError;

/// Errors raised while wiring or running page components.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    /// An element a component depends on is absent from the markup.
    #[error("missing element: {selector}")]
    MissingElement { selector: String },

    /// A project list item names a preview panel that does not exist.
    #[error("project item targets unknown preview '{id}'")]
    UnknownProject { id: String },

    /// A project list item has no target identifier attribute.
    #[error("project item has no {attribute} attribute")]
    MissingProjectId { attribute: String },

    /// A background task could not be handed to the executor.
    #[error("task spawn failed: {0}")]
    Spawn(String),

    /// Page configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl PageError {
    pub(crate) fn missing(selector: impl Into<String>) -> Self {
        Self::MissingElement { selector: selector.into() }
    }
}
