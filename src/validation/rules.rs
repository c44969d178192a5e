//! Field constraint predicate.

use std::fmt;

/// A raw form field value: either text or a number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Textual field content.
    Text(String),
    /// Numeric field content, already coerced from its raw form.
    Number(i64),
}

impl FieldValue {
    /// Returns the textual form of the value, as used by the `required`
    /// check.
    fn display_form(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Number(number) => number.to_string(),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_form())
    }
}

/// Declarative constraints applied to a single field.
///
/// `min` and `max` compare character counts for text values and the
/// numeric value for number values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Constraints {
    /// The field must have a non-empty trimmed textual form.
    pub required: bool,
    /// Inclusive lower bound (length for text, value for numbers).
    pub min: Option<i64>,
    /// Inclusive upper bound (length for text, value for numbers).
    pub max: Option<i64>,
}

impl Constraints {
    /// Constraints with only the `required` check enabled.
    #[must_use]
    pub const fn required() -> Self {
        Self {
            required: true,
            min: None,
            max: None,
        }
    }

    /// Sets the inclusive lower bound.
    #[must_use]
    pub const fn with_min(mut self, min: i64) -> Self {
        self.min = Some(min);
        self
    }

    /// Sets the inclusive upper bound.
    #[must_use]
    pub const fn with_max(mut self, max: i64) -> Self {
        self.max = Some(max);
        self
    }
}

/// Checks a field value against its constraints.
///
/// Returns `true` only when every applicable check passes. The `required`
/// check inspects the *textual* form of the value, so a numeric `0` is a
/// valid required value: its textual form `"0"` is non-empty.
#[must_use]
pub fn validate(value: &FieldValue, constraints: &Constraints) -> bool {
    let mut valid = true;

    if constraints.required {
        valid = valid && !value.display_form().trim().is_empty();
    }

    match value {
        FieldValue::Text(text) => {
            let length = text_length(text);
            if let Some(min) = constraints.min {
                valid = valid && length >= min;
            }
            if let Some(max) = constraints.max {
                valid = valid && length <= max;
            }
        }
        FieldValue::Number(number) => {
            if let Some(min) = constraints.min {
                valid = valid && *number >= min;
            }
            if let Some(max) = constraints.max {
                valid = valid && *number <= max;
            }
        }
    }

    valid
}

/// Character count of a text field, saturating on pathological lengths.
fn text_length(text: &str) -> i64 {
    i64::try_from(text.chars().count()).unwrap_or(i64::MAX)
}
