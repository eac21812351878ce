//! Wicket Validation Core
//!
//! Pure validator predicates shared by the inline form rule table and the
//! declarative schema path, plus the field-to-message error map both paths
//! report through. No async, no I/O.

pub mod email;
pub mod errors;
pub mod string;

// Re-export all validators
pub use email::*;
pub use errors::*;
pub use string::*;
