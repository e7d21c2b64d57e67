//! Validation violation reporting primitives.
//!
//! These types capture the raw material handed over by the request-handling
//! layer when declarative validation fails. They only exist long enough to
//! assemble the client-facing error message for a single request; nothing
//! here is persisted.

/// One detected rule breach on a path or query parameter.
///
/// Carries the raw dotted property path (`method.field[...]`) and the dotted
/// message template the validator evaluated, alongside the rendered message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintViolation {
    property_path: String,
    message_template: String,
    message: String,
}

impl ConstraintViolation {
    /// Capture a raw violation as reported by the validation layer.
    pub fn new(
        property_path: impl Into<String>,
        message_template: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            property_path: property_path.into(),
            message_template: message_template.into(),
            message: message.into(),
        }
    }

    /// Violated field name: the property path with its leading method segment
    /// discarded. A path without a second segment falls back to the whole
    /// path rather than failing the whole response.
    pub fn field(&self) -> &str {
        self.property_path
            .split_once('.')
            .map_or(self.property_path.as_str(), |(_, rest)| rest)
    }

    /// Rule identifier: the second-to-last dot segment of the message
    /// template, with trailing empty segments dropped. Templates with fewer
    /// than two segments fall back to the whole template.
    pub fn rule(&self) -> &str {
        let mut bits: Vec<&str> = self.message_template.split('.').collect();
        while bits.last().is_some_and(|bit| bit.is_empty()) {
            bits.pop();
        }
        match bits.len().checked_sub(2).and_then(|i| bits.get(i).copied()) {
            Some(rule) => rule,
            None => self.message_template.as_str(),
        }
    }

    /// Rendered violation message.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Assembled `field-rule-detail` report line.
    pub fn line(&self) -> String {
        format!("{}-{}-{}", self.field(), self.rule(), self.message())
    }
}

/// One field-level error raised while validating a bound request body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    field: String,
    code: String,
    message: String,
}

impl FieldError {
    /// Capture a field error as reported by body validation.
    pub fn new(
        field: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            code: code.into(),
            message: message.into(),
        }
    }

    /// Assembled `field-code-message` report line.
    pub fn line(&self) -> String {
        format!("{}-{}-{}", self.field, self.code, self.message)
    }
}

/// Join report lines into one deterministic multi-line message.
///
/// Lines are sorted lexicographically by their full text so the response is
/// reproducible regardless of the order the validator evaluated the rules.
/// The sort is deliberately over the whole assembled line, not a per-field
/// priority.
pub(crate) fn join_sorted(lines: impl IntoIterator<Item = String>) -> String {
    let mut lines: Vec<String> = lines.into_iter().collect();
    lines.sort();
    lines.join("\n")
}
