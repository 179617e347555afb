//! Contact form field and submission state.
//!
//! DESIGN
//! ======
//! Field validity and its message travel together in [`FieldStatus`], so a
//! message can only exist for an invalid field. The submission flow is a
//! small state machine in [`SubmissionPhase`]; the component advances it and
//! the rest of the page only ever observes `Idle` or `Submitting` between
//! events.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::config::ContactConfig;

/// The three contact form fields, in focus priority order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldName {
    Name,
    Email,
    Message,
}

impl FieldName {
    /// Fields in the order their errors take focus.
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Message];

    #[must_use]
    pub fn kind(self) -> FieldKind {
        match self {
            Self::Email => FieldKind::Email,
            Self::Name | Self::Message => FieldKind::Text,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

/// Validation rule applied to a field's value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// Required free text.
    Text,
    /// Required, and must look like an email address.
    Email,
}

/// Why a field failed validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldError {
    Required,
    InvalidEmail,
}

impl FieldError {
    /// Inline message shown next to the field.
    #[must_use]
    pub fn message(self, cfg: &ContactConfig) -> &str {
        match self {
            Self::Required => &cfg.required_message,
            Self::InvalidEmail => &cfg.invalid_email_message,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FieldStatus {
    #[default]
    Valid,
    Invalid(FieldError),
}

impl FieldStatus {
    #[must_use]
    pub fn is_valid(self) -> bool {
        self == Self::Valid
    }

    /// Message to display, empty exactly when the field is valid.
    #[must_use]
    pub fn message(self, cfg: &ContactConfig) -> &str {
        match self {
            Self::Valid => "",
            Self::Invalid(err) => err.message(cfg),
        }
    }
}

impl From<Result<(), FieldError>> for FieldStatus {
    fn from(result: Result<(), FieldError>) -> Self {
        match result {
            Ok(()) => Self::Valid,
            Err(err) => Self::Invalid(err),
        }
    }
}

/// Where the form is in its submit cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Validating,
    Invalid,
    Submitting,
}

impl SubmissionPhase {
    /// Phase after validation finished with the given outcome.
    #[must_use]
    pub fn after_validation(all_valid: bool) -> Self {
        if all_valid { Self::Submitting } else { Self::Invalid }
    }

    /// A submit event is accepted only from `Idle`.
    #[must_use]
    pub fn accepts_submit(self) -> bool {
        self == Self::Idle
    }
}

/// First invalid field in focus priority order.
#[must_use]
pub fn first_invalid(statuses: &[(FieldName, FieldStatus)]) -> Option<FieldName> {
    FieldName::ALL
        .into_iter()
        .find(|name| statuses.iter().any(|(n, s)| n == name && !s.is_valid()))
}
