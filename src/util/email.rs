//! Field value rules: required text and a permissive email shape.
//!
//! The email check accepts `local@domain.tld` where neither part contains
//! whitespace or `@` and the domain has a dot with text on both sides. It is
//! a shape check only, equivalent to `^[^\s@]+@[^\s@]+\.[^\s@]+$`.

#[cfg(test)]
#[path = "email_test.rs"]
mod email_test;

use crate::state::form::{FieldError, FieldKind};

/// Whitespace as the browser's regex `\s` and `String.prototype.trim` see it.
///
/// Unicode `White_Space` minus U+0085 (NEL), plus U+FEFF (BOM).
#[must_use]
pub fn is_js_whitespace(c: char) -> bool {
    match c {
        '\u{FEFF}' => true,
        '\u{0085}' => false,
        _ => c.is_whitespace(),
    }
}

/// Whether `value` has the shape of an email address.
#[must_use]
pub fn is_email_shape(value: &str) -> bool {
    if value.chars().any(is_js_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain.char_indices().any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Validate a raw field value. Surrounding whitespace is ignored.
pub fn check_field(kind: FieldKind, raw: &str) -> Result<(), FieldError> {
    let value = raw.trim_matches(is_js_whitespace);
    if value.is_empty() {
        return Err(FieldError::Required);
    }
    if kind == FieldKind::Email && !is_email_shape(value) {
        return Err(FieldError::InvalidEmail);
    }
    Ok(())
}
