//! Login status and the comment controls it unlocks.
//!
//! SYSTEM CONTEXT
//! ==============
//! Signed-in viewers get the delete-all button, the submission form and a
//! log-out link; everyone else only sees a log-in link. The control set is
//! derived from the last successful status check, so re-rendering always
//! replaces it as a whole.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use crate::net::error::ApiError;
use crate::net::types::LoginState;

pub const LOG_IN_LABEL: &str = "Log In with Google Account";
pub const LOG_OUT_LABEL: &str = "Log Out";
pub const CHECKING_LOGIN: &str = "Checking login status...";

#[derive(Clone, Debug, Default)]
pub struct LoginViewState {
    /// Last status the backend reported; `None` until the first success.
    pub login: Option<LoginState>,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthLink {
    pub label: &'static str,
    pub href: String,
}

/// Which comment controls are mounted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginControls {
    pub delete_all: bool,
    pub submit_form: bool,
    pub auth_link: AuthLink,
}

impl LoginViewState {
    pub fn begin(&mut self) {
        self.loading = true;
    }

    /// Record the outcome of a status check. Failures keep the last known
    /// status.
    pub fn finish(&mut self, result: Result<LoginState, ApiError>) {
        self.loading = false;
        match result {
            Ok(login) => {
                self.login = Some(login);
                self.error = None;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    /// Progress or failure of the status check, shown next to the controls.
    #[must_use]
    pub fn status_line(&self) -> Option<String> {
        if self.loading {
            return Some(CHECKING_LOGIN.to_owned());
        }
        self.error.as_ref().map(|e| format!("Could not check login status: {e}"))
    }

    #[must_use]
    pub fn controls(&self) -> Option<LoginControls> {
        self.login.as_ref().map(login_controls)
    }
}

#[must_use]
pub fn login_controls(state: &LoginState) -> LoginControls {
    let label = if state.is_logged_in { LOG_OUT_LABEL } else { LOG_IN_LABEL };
    LoginControls {
        delete_all: state.is_logged_in,
        submit_form: state.is_logged_in,
        auth_link: AuthLink { label, href: state.action_url.clone() },
    }
}
