//! Wicket Forms
//!
//! The credential form controller: field state, a static rule table with
//! per-field and cross-field checks, and an async submission sequence over
//! an injected authentication capability. Validation messages and the
//! submit/navigate protocol live here; rendering and routing do not.

pub mod auth;
pub mod config;
pub mod controller;
pub mod credentials;
pub mod rules;

pub use auth::{AuthResult, Authenticator, StaticAuthenticator};
pub use config::RouteTable;
pub use controller::{FormController, SubmitOutcome};
pub use credentials::{Credentials, Field, FormMode};

// Shared with the schema path, re-exported for callers that only pull
// in this crate.
pub use wicket_validation::FieldErrors;
