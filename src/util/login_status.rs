//! Login status checks feeding `LoginViewState`.

#[cfg(test)]
#[path = "login_status_test.rs"]
mod login_status_test;

#[cfg(feature = "csr")]
use leptos::prelude::Update;
use leptos::prelude::RwSignal;

use crate::net::api::{Backend, HttpBackend};
use crate::net::error::ApiError;
use crate::net::types::LoginState;
use crate::state::login::LoginViewState;

/// Ask the backend who is signed in, logging failures.
///
/// # Errors
///
/// Propagates the backend's [`ApiError`].
pub async fn check_login<B: Backend>(backend: &B) -> Result<LoginState, ApiError> {
    let result = backend.login_state().await;
    if let Err(e) = &result {
        leptos::logging::warn!("login status check failed: {e}");
    }
    result
}

/// Refresh `login` in the background.
#[cfg(feature = "csr")]
pub fn spawn_login_check(login: RwSignal<LoginViewState>, backend: HttpBackend) {
    login.update(LoginViewState::begin);
    leptos::task::spawn_local(async move {
        let result = check_login(&backend).await;
        login.update(|s| s.finish(result));
    });
}

/// Native builds have no event loop to run requests on.
#[cfg(not(feature = "csr"))]
pub fn spawn_login_check(_login: RwSignal<LoginViewState>, _backend: HttpBackend) {}
