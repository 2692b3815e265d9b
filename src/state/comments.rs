//! Comment list state and the rows derived from it.
//!
//! SYSTEM CONTEXT
//! ==============
//! The comment list, the like buttons and the submission form all end in a
//! refresh of this state. Refreshes replace the list wholesale; a failed one
//! keeps whatever was shown before.

#[cfg(test)]
#[path = "comments_test.rs"]
mod comments_test;

use crate::net::error::ApiError;
use crate::net::types::Comment;

/// Result of a load, optionally preceded by a mutation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Refresh {
    pub comments: Result<Vec<Comment>, ApiError>,
    /// Set when the like/submit/delete before the reload failed.
    pub mutation_error: Option<ApiError>,
}

impl Refresh {
    #[must_use]
    pub fn load(comments: Result<Vec<Comment>, ApiError>) -> Self {
        Self { comments, mutation_error: None }
    }

    /// Whether a submission of `submitted` went through and `draft` still
    /// holds it, so the input can be emptied.
    #[must_use]
    pub fn clears_draft(&self, draft: &str, submitted: &str) -> bool {
        self.mutation_error.is_none() && draft.trim() == submitted
    }
}

#[derive(Clone, Debug, Default)]
pub struct CommentsState {
    pub comments: Vec<Comment>,
    /// How many comments to request.
    pub limit: u32,
    pub loading: bool,
    pub error: Option<String>,
    /// Stamp of the most recent load; older responses are dropped.
    pub load_seq: u64,
}

/// One rendered line of the comment list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommentRow {
    pub content: String,
    pub author: Option<String>,
    pub like_count: i64,
    /// Comment id the like button targets; `None` hides the button.
    pub like_target: Option<i64>,
}

impl CommentRow {
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} -- {}", self.content, self.like_count)
    }
}

impl From<&Comment> for CommentRow {
    fn from(comment: &Comment) -> Self {
        Self {
            content: comment.content.clone(),
            author: comment.author.clone(),
            like_count: comment.like_count,
            like_target: comment.id,
        }
    }
}

impl CommentsState {
    #[must_use]
    pub fn new(limit: u32) -> Self {
        Self { limit, ..Self::default() }
    }

    /// Mark a load as in flight and return its stamp.
    pub fn begin_load(&mut self) -> u64 {
        self.load_seq += 1;
        self.loading = true;
        self.load_seq
    }

    /// Apply a finished refresh.
    ///
    /// Returns `false` when a newer load has started since `stamp` was
    /// issued. The stale rows are dropped but a failed mutation is still
    /// reported.
    pub fn finish_load(&mut self, stamp: u64, refresh: Refresh) -> bool {
        if stamp != self.load_seq {
            if let Some(e) = refresh.mutation_error {
                self.error = Some(e.to_string());
            }
            return false;
        }
        self.loading = false;
        let load_error = match refresh.comments {
            Ok(comments) => {
                self.comments = comments;
                None
            }
            Err(e) => Some(e),
        };
        self.error = refresh.mutation_error.or(load_error).map(|e| e.to_string());
        true
    }

    #[must_use]
    pub fn rows(&self) -> Vec<CommentRow> {
        self.comments.iter().map(CommentRow::from).collect()
    }
}

/// Why a comment draft was not sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CommentInputError {
    #[error("Comment must be a non-empty string.")]
    Empty,
    #[error("Comment must have at most {max} characters.")]
    TooLong { max: usize },
}

/// Trim a draft and check it against the backend's rules.
///
/// # Errors
///
/// Returns [`CommentInputError`] for blank drafts or drafts longer than
/// `max_chars` characters.
pub fn validate_comment_input(raw: &str, max_chars: usize) -> Result<String, CommentInputError> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(CommentInputError::Empty);
    }
    if text.chars().count() > max_chars {
        return Err(CommentInputError::TooLong { max: max_chars });
    }
    Ok(text.to_owned())
}
