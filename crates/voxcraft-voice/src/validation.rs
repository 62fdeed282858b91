use std::{fmt, ops::RangeInclusive};

use serde::Serialize;
use serde_json::Value;

/// A single offending field in a rejected request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Field path as it appears in the JSON payload (e.g. `voice_settings.style`)
    pub field: String,
    /// Human-readable reason the field was rejected
    pub message: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Request rejected before any vendor call
///
/// Carries every offending field, not just the first one found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    fields: Vec<FieldError>,
}

impl ValidationError {
    /// Build an error for a single field
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            fields: vec![FieldError {
                field: field.into(),
                message: message.into(),
            }],
        }
    }

    /// All offending fields, in the order they were checked
    pub fn fields(&self) -> &[FieldError] {
        &self.fields
    }

    /// Whether the named field is among the offenders
    pub fn has_field(&self, field: &str) -> bool {
        self.fields.iter().any(|f| f.field == field)
    }

    pub fn into_fields(self) -> Vec<FieldError> {
        self.fields
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid request: ")?;

        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{field}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Accumulates field errors while a payload is checked
#[derive(Debug, Default)]
pub struct FieldErrors {
    fields: Vec<FieldError>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an offending field
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.fields.push(FieldError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Require a string that is present and not only whitespace
    pub fn require_text(&mut self, field: &str, value: Option<&str>) {
        match value {
            None => self.push(field, "is required"),
            Some(text) if text.trim().is_empty() => self.push(field, "must not be empty"),
            Some(_) => {}
        }
    }

    /// Require a finite number within an inclusive range
    pub fn check_range(&mut self, field: &str, value: f64, range: &RangeInclusive<f64>) {
        if !range.contains(&value) {
            self.push(
                field,
                format!("must be between {} and {}, got {value}", range.start(), range.end()),
            );
        }
    }

    /// Require a finite number (NaN and infinities are rejected)
    pub fn check_finite(&mut self, field: &str, value: f64) {
        if !value.is_finite() {
            self.push(field, format!("must be a finite number, got {value}"));
        }
    }

    /// Read an optional string field; `null` counts as absent
    pub fn string(&mut self, field: &str, value: Option<Value>) -> Option<String> {
        match present(value)? {
            Value::String(text) => Some(text),
            other => {
                self.wrong_type(field, "a string", &other);
                None
            }
        }
    }

    /// Read a string field that must be present and not only whitespace
    pub fn required_text(&mut self, field: &str, value: Option<Value>) -> Option<String> {
        let Some(value) = present(value) else {
            self.push(field, "is required");
            return None;
        };

        let text = self.string(field, Some(value))?;
        self.require_text(field, Some(&text));
        Some(text)
    }

    /// Read an optional numeric field
    pub fn number(&mut self, field: &str, value: Option<Value>) -> Option<f64> {
        match present(value)? {
            Value::Number(number) => number.as_f64(),
            other => {
                self.wrong_type(field, "a number", &other);
                None
            }
        }
    }

    /// Read an optional boolean field
    pub fn boolean(&mut self, field: &str, value: Option<Value>) -> Option<bool> {
        match present(value)? {
            Value::Bool(flag) => Some(flag),
            other => {
                self.wrong_type(field, "a boolean", &other);
                None
            }
        }
    }

    fn wrong_type(&mut self, field: &str, expected: &str, got: &Value) {
        self.push(field, format!("must be {expected}, got {}", json_kind(got)));
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Return `value` if nothing was recorded, otherwise every recorded field
    pub fn finish<T>(self, value: T) -> Result<T, ValidationError> {
        if self.fields.is_empty() {
            Ok(value)
        } else {
            Err(ValidationError { fields: self.fields })
        }
    }
}

fn present(value: Option<Value>) -> Option<Value> {
    value.filter(|v| !v.is_null())
}

/// JSON type name used in type mismatch messages
fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
