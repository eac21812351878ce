// File: src/rules.rs
// Purpose: Static rule table for the credential form and its evaluation routines

use crate::credentials::{Credentials, Field, FormMode};
use wicket_validation::{equals, is_present, is_valid_email, meets_min_length, FieldErrors};

/// One constraint on one field
///
/// A rule is a pure function of the field's value and the full form
/// snapshot, so cross-field rules read their counterpart without any
/// hidden state. Failure carries the exact message shown to the user.
type RuleFn = fn(value: &str, form: &Credentials) -> Result<(), &'static str>;

struct FieldRule {
    field: Field,
    check: RuleFn,
}

fn name_required(value: &str, _form: &Credentials) -> Result<(), &'static str> {
    if is_present(value) {
        Ok(())
    } else {
        Err("Name is required")
    }
}

fn name_min_length(value: &str, _form: &Credentials) -> Result<(), &'static str> {
    if meets_min_length(value, 3) {
        Ok(())
    } else {
        Err("Name must be at least 3 characters")
    }
}

fn email_required(value: &str, _form: &Credentials) -> Result<(), &'static str> {
    if is_present(value) {
        Ok(())
    } else {
        Err("Email is required")
    }
}

fn email_format(value: &str, _form: &Credentials) -> Result<(), &'static str> {
    if is_valid_email(value) {
        Ok(())
    } else {
        Err("Invalid email format")
    }
}

fn password_required(value: &str, _form: &Credentials) -> Result<(), &'static str> {
    if is_present(value) {
        Ok(())
    } else {
        Err("Password is required")
    }
}

fn password_min_length(value: &str, _form: &Credentials) -> Result<(), &'static str> {
    if meets_min_length(value, 6) {
        Ok(())
    } else {
        Err("Password must be at least 6 characters")
    }
}

fn confirm_required(value: &str, _form: &Credentials) -> Result<(), &'static str> {
    if is_present(value) {
        Ok(())
    } else {
        Err("Confirm Password is required")
    }
}

fn confirm_matches(value: &str, form: &Credentials) -> Result<(), &'static str> {
    if equals(value, &form.password) {
        Ok(())
    } else {
        Err("Passwords do not match")
    }
}

/// The rule table, in evaluation order
///
/// Within a field the first failing rule wins and later rules for that
/// field are skipped, so a blank email reports "Email is required" and
/// never "Invalid email format".
static RULES: &[FieldRule] = &[
    FieldRule {
        field: Field::Name,
        check: name_required,
    },
    FieldRule {
        field: Field::Name,
        check: name_min_length,
    },
    FieldRule {
        field: Field::Email,
        check: email_required,
    },
    FieldRule {
        field: Field::Email,
        check: email_format,
    },
    FieldRule {
        field: Field::Password,
        check: password_required,
    },
    FieldRule {
        field: Field::Password,
        check: password_min_length,
    },
    FieldRule {
        field: Field::ConfirmPassword,
        check: confirm_required,
    },
    FieldRule {
        field: Field::ConfirmPassword,
        check: confirm_matches,
    },
];

/// Run every rule applicable under the given mode
///
/// Login mode skips the registration-only fields entirely. The result
/// maps each failing field to its first failing rule's message.
pub fn validate(credentials: &Credentials, mode: FormMode) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for rule in RULES {
        if rule.field.register_only() && !mode.is_register() {
            continue;
        }
        if errors.has_error(rule.field.as_str()) {
            continue;
        }
        if let Err(message) = (rule.check)(credentials.get(rule.field), credentials) {
            errors.record(rule.field.as_str(), message);
        }
    }
    errors
}

/// Re-run the rules for a single field
///
/// Returns the first failing message, or `None` when the field passes
/// or is inactive under the given mode.
pub fn validate_field(field: Field, credentials: &Credentials, mode: FormMode) -> Option<&'static str> {
    if field.register_only() && !mode.is_register() {
        return None;
    }
    RULES
        .iter()
        .filter(|rule| rule.field == field)
        .find_map(|rule| (rule.check)(credentials.get(field), credentials).err())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn register_form(name: &str, email: &str, password: &str, cpassword: &str) -> Credentials {
        let mut credentials = Credentials::new();
        credentials.set(Field::Name, name);
        credentials.set(Field::Email, email);
        credentials.set(Field::Password, password);
        credentials.set(Field::ConfirmPassword, cpassword);
        credentials
    }

    #[test]
    fn test_login_mode_checks_only_email_and_password() {
        let errors = validate(&Credentials::new(), FormMode::Login);

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get_error("email"), Some("Email is required"));
        assert_eq!(errors.get_error("password"), Some("Password is required"));
        assert!(!errors.has_error("name"));
        assert!(!errors.has_error("cpassword"));
    }

    #[test]
    fn test_register_mode_checks_all_fields() {
        let errors = validate(&Credentials::new(), FormMode::Register);

        assert_eq!(errors.len(), 4);
        assert_eq!(errors.get_error("name"), Some("Name is required"));
        assert_eq!(errors.get_error("cpassword"), Some("Confirm Password is required"));
    }

    #[test]
    fn test_first_failing_rule_wins() {
        let mut credentials = Credentials::new();
        credentials.set(Field::Email, "");
        let errors = validate(&credentials, FormMode::Login);

        // Required fires before the format rule for the same field.
        assert_eq!(errors.get_error("email"), Some("Email is required"));
    }

    #[rstest]
    #[case(Field::Email, "not-an-email", "Invalid email format")]
    #[case(Field::Email, "user@host", "Invalid email format")]
    #[case(Field::Password, "12345", "Password must be at least 6 characters")]
    #[case(Field::Name, "ab", "Name must be at least 3 characters")]
    fn test_format_and_length_rules(
        #[case] field: Field,
        #[case] value: &str,
        #[case] expected: &str,
    ) {
        let mut credentials = register_form("Alice", "alice@example.com", "secret123", "secret123");
        credentials.set(field, value);
        if field == Field::Password {
            // Keep the confirmation aligned so only the length rule fires.
            credentials.set(Field::ConfirmPassword, value);
        }

        let errors = validate(&credentials, FormMode::Register);
        assert_eq!(errors.get_error(field.as_str()), Some(expected));
    }

    #[test]
    fn test_password_mismatch() {
        let credentials = register_form("Alice", "alice@example.com", "secret123", "secret124");
        let errors = validate(&credentials, FormMode::Register);

        assert_eq!(errors.get_error("cpassword"), Some("Passwords do not match"));
        assert!(!errors.has_error("password"));
    }

    #[test]
    fn test_valid_registration_has_no_errors() {
        let credentials = register_form("Alice", "alice@example.com", "secret123", "secret123");
        let errors = validate(&credentials, FormMode::Register);

        assert!(errors.is_empty());
    }

    #[test]
    fn test_six_character_password_accepted() {
        let mut credentials = Credentials::new();
        credentials.set(Field::Email, "user@example.com");
        credentials.set(Field::Password, "123456");

        let errors = validate(&credentials, FormMode::Login);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_whitespace_satisfies_required() {
        let mut credentials = Credentials::new();
        credentials.set(Field::Email, "user@example.com");
        credentials.set(Field::Password, "      ");

        // Required checks presence, not content; six spaces also clear
        // the length rule.
        let errors = validate(&credentials, FormMode::Login);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_validate_field_single_field() {
        let mut credentials = Credentials::new();
        credentials.set(Field::Email, "broken@");

        assert_eq!(
            validate_field(Field::Email, &credentials, FormMode::Login),
            Some("Invalid email format")
        );

        credentials.set(Field::Email, "fixed@example.com");
        assert_eq!(validate_field(Field::Email, &credentials, FormMode::Login), None);
    }

    #[test]
    fn test_validate_field_skips_inactive_fields() {
        let credentials = Credentials::new();

        assert_eq!(validate_field(Field::Name, &credentials, FormMode::Login), None);
        assert_eq!(
            validate_field(Field::Name, &credentials, FormMode::Register),
            Some("Name is required")
        );
    }

    #[test]
    fn test_confirmation_tracks_password_edits() {
        let mut credentials = register_form("Alice", "alice@example.com", "secret123", "secret123");
        assert_eq!(
            validate_field(Field::ConfirmPassword, &credentials, FormMode::Register),
            None
        );

        credentials.set(Field::Password, "changed456");
        assert_eq!(
            validate_field(Field::ConfirmPassword, &credentials, FormMode::Register),
            Some("Passwords do not match")
        );
    }
}
