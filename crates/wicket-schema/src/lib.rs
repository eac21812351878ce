//! Wicket Schema
//!
//! A declarative validation path: field constraints described as composable
//! schemas instead of inline per-field callbacks, usable by any submission
//! path that needs the same guarantees without duplicating rule logic.
//!
//! ```
//! use wicket_schema::{FieldSchema, Schema};
//! use std::collections::HashMap;
//!
//! let schema = Schema::new()
//!     .with_field(FieldSchema::string("email").required("Please enter email"));
//!
//! let mut values = HashMap::new();
//! values.insert("email".to_string(), "user@example.com".to_string());
//! assert!(schema.validate(&values).is_ok());
//! ```

pub mod schema;
pub mod signup;

pub use schema::{FieldSchema, FieldSource, Rule, Schema};
pub use signup::signup_schema;
