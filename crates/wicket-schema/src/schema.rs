// File: src/schema.rs
// Purpose: Composable per-field rule schemas with first-failure-wins semantics

use wicket_validation::{equals, is_present, is_valid_email, meets_min_length, FieldErrors};

/// Source of raw field values for schema validation
///
/// Missing fields read as the empty string, the same as an untouched input.
pub trait FieldSource {
    fn field(&self, name: &str) -> Option<&str>;
}

impl FieldSource for std::collections::HashMap<String, String> {
    fn field(&self, name: &str) -> Option<&str> {
        self.get(name).map(|s| s.as_str())
    }
}

/// A single declarative constraint on one field
#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    /// Value must be non-empty
    Required { message: String },
    /// Value must have at least `min` characters
    MinLength { min: usize },
    /// Value must look like an email address
    Email { message: String },
    /// Value must equal the current value of another field
    EqualsField { other: String, message: String },
}

/// Rules for one named field, evaluated in declaration order
///
/// `required` is checked first no matter where it was declared; the
/// remaining rules run in declaration order and the first failure wins.
#[derive(Debug, Clone)]
pub struct FieldSchema {
    name: String,
    rules: Vec<Rule>,
}

impl FieldSchema {
    /// Start a schema for a string field
    pub fn string(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rules: Vec::new(),
        }
    }

    /// Require at least `min` characters
    ///
    /// Failure message is derived from the field name:
    /// `"<name> must be at least <min> characters"`.
    pub fn min_length(mut self, min: usize) -> Self {
        self.rules.push(Rule::MinLength { min });
        self
    }

    /// Require email format
    pub fn email(mut self, message: impl Into<String>) -> Self {
        self.rules.push(Rule::Email {
            message: message.into(),
        });
        self
    }

    /// Require equality with another field's current value
    pub fn equals_field(mut self, other: impl Into<String>, message: impl Into<String>) -> Self {
        self.rules.push(Rule::EqualsField {
            other: other.into(),
            message: message.into(),
        });
        self
    }

    /// Require a non-empty value
    pub fn required(mut self, message: impl Into<String>) -> Self {
        self.rules.push(Rule::Required {
            message: message.into(),
        });
        self
    }

    /// Field name this schema applies to
    pub fn name(&self) -> &str {
        &self.name
    }

    /// First failing rule's message, or None when the field is valid
    fn check<S: FieldSource>(&self, source: &S) -> Option<String> {
        let value = source.field(&self.name).unwrap_or("");

        // Required wins over every other rule for an empty value
        for rule in &self.rules {
            if let Rule::Required { message } = rule {
                if !is_present(value) {
                    return Some(message.clone());
                }
            }
        }

        for rule in &self.rules {
            match rule {
                Rule::Required { .. } => {}
                Rule::MinLength { min } => {
                    if !meets_min_length(value, *min) {
                        return Some(format!(
                            "{} must be at least {} characters",
                            self.name, min
                        ));
                    }
                }
                Rule::Email { message } => {
                    if !is_valid_email(value) {
                        return Some(message.clone());
                    }
                }
                Rule::EqualsField { other, message } => {
                    let expected = source.field(other).unwrap_or("");
                    if !equals(value, expected) {
                        return Some(message.clone());
                    }
                }
            }
        }

        None
    }
}

/// A set of field schemas validated together
///
/// Every field is evaluated (errors accumulate across fields); within one
/// field, at most one message is reported.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    fields: Vec<FieldSchema>,
}

impl Schema {
    /// Create an empty schema
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Add a field schema (functional builder pattern)
    pub fn with_field(mut self, field: FieldSchema) -> Self {
        self.fields.push(field);
        self
    }

    /// Validate a value source against every field schema
    pub fn validate<S: FieldSource>(&self, source: &S) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        for field in &self.fields {
            if let Some(message) = field.check(source) {
                errors.record(field.name(), message);
            }
        }

        errors.into_result()
    }
}
