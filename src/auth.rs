//! Login and registration flow
//!
//! One form, two modes. Registration is followed immediately by a login with
//! the same credentials. A failure at any step produces a single message and
//! leaves the session untouched.
//!
//! The `submitting` flag is the disabled state of the submit button: a second
//! submission while one is in flight is dropped here, before any request is
//! made. Nothing deduplicates submissions further down.

use std::cell::{Cell, RefCell};

use crate::api::{ApiError, Credentials, FinanceApi, RegisterRequest, GENERIC_ERROR_MESSAGE};
use crate::router::{Location, DEFAULT_PATH, LOGIN_PATH};
use crate::session::{SessionStorage, SessionStore};

/// Message used when the login following a registration fails without detail
pub const LOGIN_AFTER_REGISTER_FAILED: &str = "Login failed after registration";

/// Submit button text while an exchange is in flight
pub const SUBMITTING_LABEL: &str = "Please wait...";

/// Which exchange the login form performs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    /// `?register=true` selects registration
    pub fn from_location(location: &Location) -> Self {
        match location.query_param("register") {
            Some("true") => AuthMode::Register,
            _ => AuthMode::Login,
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            AuthMode::Login => "Welcome back",
            AuthMode::Register => "Create your account",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            AuthMode::Login => "Sign in",
            AuthMode::Register => "Create Account",
        }
    }

    /// Prompt in front of the mode-switch link
    pub fn switch_prompt(&self) -> &'static str {
        match self {
            AuthMode::Login => "Don't have an account?",
            AuthMode::Register => "Already have an account?",
        }
    }

    /// Text of the mode-switch link
    pub fn switch_label(&self) -> &'static str {
        match self {
            AuthMode::Login => "Sign up",
            AuthMode::Register => "Sign in",
        }
    }

    /// Where the mode-switch link goes
    pub fn switch_path(&self) -> &'static str {
        match self {
            AuthMode::Login => "/login?register=true",
            AuthMode::Register => LOGIN_PATH,
        }
    }

    /// Registration asks for a full name as well
    pub fn needs_full_name(&self) -> bool {
        matches!(self, AuthMode::Register)
    }
}

/// Values typed into the login form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub full_name: String,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            full_name: String::new(),
        }
    }

    pub fn with_full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = full_name.into();
        self
    }

    pub fn credentials(&self) -> Credentials {
        Credentials {
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }

    pub fn register_request(&self) -> RegisterRequest {
        RegisterRequest {
            email: self.email.clone(),
            password: self.password.clone(),
            full_name: self.full_name.clone(),
        }
    }
}

/// Result of pressing the submit button
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A submission was already in flight; nothing was sent
    Blocked,
    /// Session stored; navigate to `redirect`
    Authenticated { redirect: &'static str },
    /// Exchange failed; `message` is shown inline
    Failed { message: String },
}

/// Form state shared by the submit handler and the view
#[derive(Debug, Default)]
pub struct AuthFlow {
    submitting: Cell<bool>,
    error: RefCell<Option<String>>,
}

impl AuthFlow {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while an exchange is in flight (submit button disabled)
    pub fn is_submitting(&self) -> bool {
        self.submitting.get()
    }

    /// Inline error from the last failed submission
    pub fn error(&self) -> Option<String> {
        self.error.borrow().clone()
    }

    /// Submit button text for the current state
    pub fn submit_label(&self, mode: AuthMode) -> &'static str {
        if self.is_submitting() {
            SUBMITTING_LABEL
        } else {
            mode.submit_label()
        }
    }

    /// Run the exchange for `mode` and store the session on success
    pub async fn submit<A, S>(
        &self,
        api: &A,
        store: &SessionStore<S>,
        mode: AuthMode,
        form: &LoginForm,
    ) -> SubmitOutcome
    where
        A: FinanceApi + ?Sized,
        S: SessionStorage,
    {
        if self.submitting.replace(true) {
            tracing::debug!("Submission ignored, one is already in flight");
            return SubmitOutcome::Blocked;
        }
        self.error.replace(None);

        let outcome = match exchange(api, mode, form).await {
            Ok(token) => {
                store.login(token.access_token, token.user);
                SubmitOutcome::Authenticated {
                    redirect: DEFAULT_PATH,
                }
            }
            Err(message) => {
                tracing::warn!(?mode, "Authentication failed: {}", message);
                self.error.replace(Some(message.clone()));
                SubmitOutcome::Failed { message }
            }
        };

        self.submitting.set(false);
        outcome
    }
}

async fn exchange<A>(
    api: &A,
    mode: AuthMode,
    form: &LoginForm,
) -> Result<crate::api::TokenResponse, String>
where
    A: FinanceApi + ?Sized,
{
    match mode {
        AuthMode::Login => api
            .login(&form.credentials())
            .await
            .map_err(|e| message_for(&e, GENERIC_ERROR_MESSAGE)),
        AuthMode::Register => {
            api.register(&form.register_request())
                .await
                .map_err(|e| message_for(&e, GENERIC_ERROR_MESSAGE))?;
            tracing::info!(email = %form.email, "Registered, signing in");
            api.login(&form.credentials())
                .await
                .map_err(|e| message_for(&e, LOGIN_AFTER_REGISTER_FAILED))
        }
    }
}

fn message_for(err: &ApiError, fallback: &str) -> String {
    err.user_message(fallback)
}
