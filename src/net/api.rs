//! REST calls for comments and login status.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: every call returns [`ApiError::Unavailable`] since these
//! endpoints are only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, non-2xx statuses and malformed bodies all come back as
//! `ApiError` so callers can keep the previous view and log, instead of
//! leaving the page half-rendered.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{Comment, LoginState};
use crate::config::SiteConfig;

pub const DATA_PATH: &str = "/data";
pub const LIKE_PATH: &str = "/like";
pub const LOGIN_PATH: &str = "/login";

/// The backend the view talks to.
///
/// Components hold an [`HttpBackend`]; tests substitute an in-memory one.
#[allow(async_fn_in_trait)]
pub trait Backend {
    /// `GET /data?limit=N`.
    async fn list_comments(&self, limit: u32) -> Result<Vec<Comment>, ApiError>;
    /// `POST /data?newComment=<text>`.
    async fn submit_comment(&self, text: &str) -> Result<(), ApiError>;
    /// `DELETE /data`.
    async fn delete_comments(&self) -> Result<(), ApiError>;
    /// `POST /like?commentId=<id>`.
    async fn like_comment(&self, id: i64) -> Result<(), ApiError>;
    /// `GET /login`, plus `POST /login` when the first answer is status-only.
    async fn login_state(&self) -> Result<LoginState, ApiError>;
}

/// [`Backend`] over `fetch`, rooted at `SiteConfig::api_base`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HttpBackend {
    config: SiteConfig,
}

impl HttpBackend {
    #[must_use]
    pub fn new(config: &SiteConfig) -> Self {
        Self { config: config.clone() }
    }
}

#[cfg(any(test, feature = "csr"))]
fn list_endpoint(config: &SiteConfig, limit: u32) -> String {
    format!("{}?limit={limit}", config.endpoint(DATA_PATH))
}

#[cfg(any(test, feature = "csr"))]
fn like_endpoint(config: &SiteConfig, id: i64) -> String {
    format!("{}?commentId={id}", config.endpoint(LIKE_PATH))
}

#[cfg(feature = "csr")]
async fn send(request: gloo_net::http::RequestBuilder) -> Result<gloo_net::http::Response, ApiError> {
    let resp = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let status = resp.status();
    if !(200..300).contains(&status) {
        return Err(ApiError::Status(status));
    }
    Ok(resp)
}

#[cfg(feature = "csr")]
async fn read_text(resp: gloo_net::http::Response) -> Result<String, ApiError> {
    resp.text().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "csr")]
impl Backend for HttpBackend {
    async fn list_comments(&self, limit: u32) -> Result<Vec<Comment>, ApiError> {
        use gloo_net::http::Request;

        let resp = send(Request::get(&list_endpoint(&self.config, limit))).await?;
        super::types::parse_comments(&read_text(resp).await?)
    }

    async fn submit_comment(&self, text: &str) -> Result<(), ApiError> {
        use gloo_net::http::Request;

        let url = self.config.endpoint(DATA_PATH);
        send(Request::post(&url).query([("newComment", text)])).await?;
        Ok(())
    }

    async fn delete_comments(&self) -> Result<(), ApiError> {
        use gloo_net::http::Request;

        let url = self.config.endpoint(DATA_PATH);
        send(Request::delete(&url)).await?;
        Ok(())
    }

    async fn like_comment(&self, id: i64) -> Result<(), ApiError> {
        use gloo_net::http::Request;

        send(Request::post(&like_endpoint(&self.config, id))).await?;
        Ok(())
    }

    async fn login_state(&self) -> Result<LoginState, ApiError> {
        use super::types::{LoginResponse, parse_action_url, parse_login_response};
        use gloo_net::http::Request;

        let url = self.config.endpoint(LOGIN_PATH);
        let body = read_text(send(Request::get(&url)).await?).await?;
        match parse_login_response(&body)? {
            LoginResponse::Full(state) => Ok(state),
            LoginResponse::StatusOnly(is_logged_in) => {
                let body = read_text(send(Request::post(&url)).await?).await?;
                Ok(LoginState { is_logged_in, action_url: parse_action_url(&body) })
            }
        }
    }
}

#[cfg(not(feature = "csr"))]
impl Backend for HttpBackend {
    async fn list_comments(&self, _limit: u32) -> Result<Vec<Comment>, ApiError> {
        Err(ApiError::Unavailable)
    }

    async fn submit_comment(&self, _text: &str) -> Result<(), ApiError> {
        Err(ApiError::Unavailable)
    }

    async fn delete_comments(&self) -> Result<(), ApiError> {
        Err(ApiError::Unavailable)
    }

    async fn like_comment(&self, _id: i64) -> Result<(), ApiError> {
        Err(ApiError::Unavailable)
    }

    async fn login_state(&self) -> Result<LoginState, ApiError> {
        Err(ApiError::Unavailable)
    }
}
