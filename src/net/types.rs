//! Wire DTOs for the `/data` and `/login` endpoints.
//!
//! DESIGN
//! ======
//! Several deployments of the backend disagree on response shapes: `/data`
//! returns either comment records or bare strings, and `/login` returns either
//! a `{isLoggedIn, url}` object or a bare boolean with the URL served by a
//! separate `POST`. The parsers here accept every variant and normalize to a
//! single model.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use super::error::ApiError;

/// A comment as listed by `GET /data`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Datastore id; absent when the backend only returns comment text.
    #[serde(default)]
    pub id: Option<i64>,
    pub content: String,
    /// Author identifier, when the backend records one.
    #[serde(default, alias = "email")]
    pub author: Option<String>,
    #[serde(default)]
    pub like_count: i64,
}

impl Comment {
    /// A comment known only by its text.
    #[must_use]
    pub fn text_only(content: impl Into<String>) -> Self {
        Self { id: None, content: content.into(), author: None, like_count: 0 }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CommentWire {
    Record(Comment),
    Text(String),
}

impl From<CommentWire> for Comment {
    fn from(wire: CommentWire) -> Self {
        match wire {
            CommentWire::Record(comment) => comment,
            CommentWire::Text(content) => Self::text_only(content),
        }
    }
}

/// Decode a `GET /data` body.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] if the body is not a JSON array of comment
/// records or strings.
pub fn parse_comments(body: &str) -> Result<Vec<Comment>, ApiError> {
    let items: Vec<CommentWire> = serde_json::from_str(body)?;
    Ok(items.into_iter().map(Comment::from).collect())
}

/// Whether the viewer is signed in, and where to go to flip that.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginState {
    #[serde(rename = "isLoggedIn")]
    pub is_logged_in: bool,
    /// Log-out URL when signed in, log-in URL otherwise.
    #[serde(rename = "url")]
    pub action_url: String,
}

/// Body of `GET /login`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum LoginResponse {
    /// Complete state in one response.
    Full(LoginState),
    /// Status only; the action URL comes from `POST /login`.
    StatusOnly(bool),
}

/// Decode a `GET /login` body.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] if the body is neither a login object nor a
/// JSON boolean.
pub fn parse_login_response(body: &str) -> Result<LoginResponse, ApiError> {
    Ok(serde_json::from_str(body.trim())?)
}

/// Decode a `POST /login` body into the action URL.
///
/// The servlet writes the URL as plain text followed by a newline; a
/// JSON-quoted string is accepted too.
#[must_use]
pub fn parse_action_url(body: &str) -> String {
    let trimmed = body.trim();
    match serde_json::from_str::<String>(trimmed) {
        Ok(url) => url,
        Err(_) => trimmed.to_owned(),
    }
}
