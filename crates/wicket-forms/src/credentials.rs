// File: src/credentials.rs
// Purpose: Credential form data, field identifiers, and the login/register mode

use serde::{Deserialize, Serialize};
use wicket_schema::FieldSource;

/// Which variant of the credential form is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormMode {
    Login,
    Register,
}

impl Default for FormMode {
    fn default() -> Self {
        FormMode::Login
    }
}

impl FormMode {
    /// Whether the registration-only fields are active
    pub fn is_register(&self) -> bool {
        matches!(self, FormMode::Register)
    }
}

/// The credential form fields, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Password,
    ConfirmPassword,
}

impl Field {
    /// All fields in display order
    pub const ALL: [Field; 4] = [
        Field::Name,
        Field::Email,
        Field::Password,
        Field::ConfirmPassword,
    ];

    /// Field name as it appears in submitted form data
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Password => "password",
            Field::ConfirmPassword => "cpassword",
        }
    }

    /// Whether this field only exists in registration mode
    pub fn register_only(&self) -> bool {
        matches!(self, Field::Name | Field::ConfirmPassword)
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Field values for one login or registration attempt
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub cpassword: String,
}

impl Credentials {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of a field
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.cpassword,
        }
    }

    /// Overwrite one field's value
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Password => self.password = value,
            Field::ConfirmPassword => self.cpassword = value,
        }
    }

    /// Copy of these credentials as submitted under the given mode
    ///
    /// Login mode carries no registration-only fields, so their values
    /// are blanked in the copy.
    pub fn for_mode(&self, mode: FormMode) -> Credentials {
        let mut submitted = self.clone();
        if !mode.is_register() {
            submitted.name.clear();
            submitted.cpassword.clear();
        }
        submitted
    }
}

impl FieldSource for Credentials {
    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "name" => Some(&self.name),
            "email" => Some(&self.email),
            "password" => Some(&self.password),
            "cpassword" => Some(&self.cpassword),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set_roundtrip() {
        let mut credentials = Credentials::new();
        credentials.set(Field::Email, "user@example.com");
        credentials.set(Field::Password, "hunter2");

        assert_eq!(credentials.get(Field::Email), "user@example.com");
        assert_eq!(credentials.get(Field::Password), "hunter2");
        assert_eq!(credentials.get(Field::Name), "");
    }

    #[test]
    fn test_for_mode_login_blanks_registration_fields() {
        let mut credentials = Credentials::new();
        credentials.set(Field::Name, "Alice");
        credentials.set(Field::Email, "alice@example.com");
        credentials.set(Field::Password, "secret123");
        credentials.set(Field::ConfirmPassword, "secret123");

        let submitted = credentials.for_mode(FormMode::Login);
        assert_eq!(submitted.name, "");
        assert_eq!(submitted.cpassword, "");
        assert_eq!(submitted.email, "alice@example.com");
        assert_eq!(submitted.password, "secret123");
    }

    #[test]
    fn test_for_mode_register_keeps_everything() {
        let mut credentials = Credentials::new();
        credentials.set(Field::Name, "Alice");
        credentials.set(Field::ConfirmPassword, "secret123");

        let submitted = credentials.for_mode(FormMode::Register);
        assert_eq!(submitted, credentials);
    }

    #[test]
    fn test_field_source_lookup() {
        let mut credentials = Credentials::new();
        credentials.set(Field::Name, "Bob");

        assert_eq!(credentials.field("name"), Some("Bob"));
        assert_eq!(credentials.field("email"), Some(""));
        assert_eq!(credentials.field("unknown"), None);
    }

    #[test]
    fn test_register_only_fields() {
        assert!(Field::Name.register_only());
        assert!(Field::ConfirmPassword.register_only());
        assert!(!Field::Email.register_only());
        assert!(!Field::Password.register_only());
    }
}
