//! The canned signup schema
//!
//! This is the auxiliary validation path for the signup form. Its password
//! minimum (5) and all of its messages intentionally differ from the form
//! controller's rule table; the two rule sets are independent and are
//! never merged.

use crate::schema::{FieldSchema, Schema};

/// Build the signup validation schema
pub fn signup_schema() -> Schema {
    Schema::new()
        .with_field(
            FieldSchema::string("name")
                .min_length(3)
                .required("Please enter name"),
        )
        .with_field(
            FieldSchema::string("email")
                .email("Please enter valid email")
                .required("Please enter email"),
        )
        .with_field(
            FieldSchema::string("password")
                .min_length(5)
                .required("Please enter the password"),
        )
        .with_field(
            FieldSchema::string("cpassword")
                .equals_field("password", "Password not matched")
                .required("Please enter confirm password"),
        )
}
