//! Field-level validation errors

use serde::Serialize;
use std::collections::HashMap;

/// Map from field name to one human-readable error message
///
/// A field carries at most one message at a time: the first failing rule
/// wins and later failures for the same field are ignored until the field
/// is re-validated.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors {
    errors: HashMap<String, String>,
}

impl FieldErrors {
    /// Create an empty error map
    pub fn new() -> Self {
        Self {
            errors: HashMap::new(),
        }
    }

    /// Record a message for a field, keeping an earlier one if present
    pub fn record(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.entry(field.into()).or_insert_with(|| message.into());
    }

    /// Drop the message for a field, if any
    pub fn remove(&mut self, field: &str) {
        self.errors.remove(field);
    }

    /// Check if field has an error
    pub fn has_error(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    /// Get error message for a field
    pub fn get_error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(|s| s.as_str())
    }

    /// Check if there are no errors at all
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of fields currently in error
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Iterate over (field, message) pairs in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Convert to a Result: empty map means valid
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}
