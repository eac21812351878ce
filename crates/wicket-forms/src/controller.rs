// File: src/controller.rs
// Purpose: Credential form state machine: edits, validation, submission, navigation

use crate::auth::{AuthResult, Authenticator};
use crate::config::RouteTable;
use crate::credentials::{Credentials, Field, FormMode};
use crate::rules;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};
use wicket_validation::FieldErrors;

/// What one submission attempt produced
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// A previous attempt is still in flight; nothing was done
    InFlight,
    /// Field validation failed; the capability was never called
    Invalid(FieldErrors),
    /// The capability said no (or failed); the form stays up
    Denied(String),
    /// Confirmed success: navigate to this route
    Redirect(String),
}

/// Mutable form state, only ever touched behind the controller's lock
#[derive(Debug, Default)]
struct FormState {
    credentials: Credentials,
    mode: FormMode,
    errors: FieldErrors,
    auth_error: Option<String>,
    pending: bool,
    validated: bool,
}

/// Login/registration form controller
///
/// Holds field values, per-field errors, and the top-level
/// authentication error behind a shared lock; clones refer to the same
/// form. The authentication capability is injected at construction and
/// is only reached once every applicable field rule passes.
#[derive(Clone)]
pub struct FormController {
    authenticator: Arc<dyn Authenticator>,
    routes: RouteTable,
    state: Arc<RwLock<FormState>>,
}

impl FormController {
    /// Create a controller in login mode with the default routes
    pub fn new(authenticator: Arc<dyn Authenticator>) -> Self {
        Self::with_routes(authenticator, RouteTable::default())
    }

    /// Create a controller with explicit route configuration
    pub fn with_routes(authenticator: Arc<dyn Authenticator>, routes: RouteTable) -> Self {
        Self {
            authenticator,
            routes,
            state: Arc::new(RwLock::new(FormState::default())),
        }
    }

    /// Current form mode
    pub async fn mode(&self) -> FormMode {
        self.state.read().await.mode
    }

    /// Switch between login and registration
    ///
    /// Leaving registration drops the registration-only fields: their
    /// values blank out and any errors on them clear immediately.
    pub async fn set_mode(&self, mode: FormMode) {
        let mut state = self.state.write().await;
        if state.mode == mode {
            return;
        }
        state.mode = mode;
        if !mode.is_register() {
            for field in [Field::Name, Field::ConfirmPassword] {
                state.credentials.set(field, "");
                state.errors.remove(field.as_str());
            }
        }
        debug!(mode = ?mode, "form mode changed");
    }

    /// Current value of a field
    pub async fn value(&self, field: Field) -> String {
        self.state.read().await.credentials.get(field).to_string()
    }

    /// Record input for one field
    ///
    /// Before the first submit runs validation, typing never surfaces
    /// errors. Afterwards the edited field re-validates on every change,
    /// and editing either password field re-checks the confirmation.
    pub async fn set_field(&self, field: Field, value: impl Into<String>) {
        let mut state = self.state.write().await;
        state.credentials.set(field, value);
        if !state.validated {
            return;
        }
        Self::revalidate(&mut state, field);
        if field == Field::Password {
            Self::revalidate(&mut state, Field::ConfirmPassword);
        }
    }

    fn revalidate(state: &mut FormState, field: Field) {
        state.errors.remove(field.as_str());
        if let Some(message) = rules::validate_field(field, &state.credentials, state.mode) {
            state.errors.record(field.as_str(), message);
        }
    }

    /// Error currently attached to a field
    pub async fn field_error(&self, field: Field) -> Option<String> {
        self.state
            .read()
            .await
            .errors
            .get_error(field.as_str())
            .map(String::from)
    }

    /// Snapshot of all current field errors
    pub async fn field_errors(&self) -> FieldErrors {
        self.state.read().await.errors.clone()
    }

    /// Top-level authentication error from the last attempt, if any
    pub async fn auth_error(&self) -> Option<String> {
        self.state.read().await.auth_error.clone()
    }

    /// Whether a submission is currently awaiting the capability
    pub async fn is_pending(&self) -> bool {
        self.state.read().await.pending
    }

    /// Route target for the switch-to-registration link
    pub fn signup_route(&self) -> &str {
        &self.routes.signup_route
    }

    /// Validate and, if every rule passes, hand the form to the capability
    ///
    /// A submission runs in order:
    /// 1. refuse re-entry while a previous attempt is in flight;
    /// 2. run every applicable field rule, storing the messages and
    ///    stopping before the capability on any failure;
    /// 3. await the capability with the pending flag raised;
    /// 4. on success, clear the top-level error and signal navigation;
    /// 5. on denial or capability failure, keep the form up with one
    ///    displayable top-level message, field errors untouched.
    pub async fn submit(&self) -> SubmitOutcome {
        let submitted = {
            let mut state = self.state.write().await;
            if state.pending {
                debug!("submit ignored, attempt already in flight");
                return SubmitOutcome::InFlight;
            }
            state.validated = true;

            let errors = rules::validate(&state.credentials, state.mode);
            state.errors = errors.clone();
            if !errors.is_empty() {
                let failed = errors
                    .iter()
                    .map(|(field, _)| field)
                    .collect::<Vec<_>>()
                    .join(", ");
                debug!(fields = %failed, "submission blocked by field validation");
                return SubmitOutcome::Invalid(errors);
            }

            state.pending = true;
            state.credentials.for_mode(state.mode)
        };
        // Lock released while the capability runs; the pending flag
        // keeps further submits out.

        let result = self.authenticator.login(&submitted).await;

        let mut state = self.state.write().await;
        state.pending = false;
        match result {
            Ok(AuthResult { success: true, .. }) => {
                state.auth_error = None;
                info!(route = %self.routes.success_route, "login confirmed");
                SubmitOutcome::Redirect(self.routes.success_route.clone())
            }
            Ok(AuthResult {
                success: false,
                message,
            }) => {
                let message = message.unwrap_or_else(|| "Authentication failed".to_string());
                info!(%message, "login denied");
                state.auth_error = Some(message.clone());
                SubmitOutcome::Denied(message)
            }
            Err(error) => {
                let message = error.to_string();
                info!(%message, "login capability failed");
                state.auth_error = Some(message.clone());
                SubmitOutcome::Denied(message)
            }
        }
    }
}
