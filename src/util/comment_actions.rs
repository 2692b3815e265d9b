//! Comment mutations and the reload that follows each of them.
//!
//! SYSTEM CONTEXT
//! ==============
//! Likes, submissions, delete-all and limit changes all funnel through
//! [`run_action`], which performs the mutation (if any) and then always
//! reloads, the same way the page chains "request, then re-render".
//! The reload is stamped only after the mutation resolves.
//! Components start actions with [`spawn_comment_action`].

#[cfg(test)]
#[path = "comment_actions_test.rs"]
mod comment_actions_test;

#[cfg(feature = "csr")]
use leptos::prelude::Update;
use leptos::prelude::RwSignal;

use crate::net::api::{Backend, HttpBackend};
use crate::net::error::ApiError;
use crate::net::types::Comment;
use crate::state::comments::{CommentsState, Refresh};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommentAction {
    Reload,
    Like(i64),
    Submit(String),
    DeleteAll,
}

impl CommentAction {
    fn name(&self) -> &'static str {
        match self {
            Self::Reload => "reload",
            Self::Like(_) => "like",
            Self::Submit(_) => "submit",
            Self::DeleteAll => "delete",
        }
    }
}

/// Request the first `limit` comments.
///
/// Backends that return more than asked are cut down to `limit`.
///
/// # Errors
///
/// Propagates the backend's [`ApiError`].
pub async fn fetch_comments<B: Backend>(backend: &B, limit: u32) -> Result<Vec<Comment>, ApiError> {
    let mut comments = backend.list_comments(limit).await?;
    comments.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
    Ok(comments)
}

/// Send the like/submit/delete behind `action`. `Reload` sends nothing.
///
/// A failure is logged and returned; the reload that follows runs either way.
pub async fn apply_mutation<B: Backend>(backend: &B, action: &CommentAction) -> Option<ApiError> {
    let mutation = match action {
        CommentAction::Reload => Ok(()),
        CommentAction::Like(id) => backend.like_comment(*id).await,
        CommentAction::Submit(text) => backend.submit_comment(text).await,
        CommentAction::DeleteAll => backend.delete_comments().await,
    };
    match mutation {
        Ok(()) => None,
        Err(e) => {
            leptos::logging::warn!("comment {} failed: {e}", action.name());
            Some(e)
        }
    }
}

/// Perform `action`, then reload.
///
/// `begin_load` runs only after the mutation has resolved. It returns the
/// load stamp and the limit to request.
pub async fn run_action<B, F>(backend: &B, action: &CommentAction, begin_load: F) -> (u64, Refresh)
where
    B: Backend,
    F: FnOnce() -> (u64, u32),
{
    let mutation_error = apply_mutation(backend, action).await;

    let (stamp, limit) = begin_load();
    let comments = fetch_comments(backend, limit).await;
    if let Err(e) = &comments {
        leptos::logging::warn!("loading comments failed: {e}");
    }
    (stamp, Refresh { comments, mutation_error })
}

/// Run `action` in the background and apply the result to `comments`.
pub fn spawn_comment_action(comments: RwSignal<CommentsState>, backend: HttpBackend, action: CommentAction) {
    spawn_comment_action_then(comments, backend, action, |_| {});
}

/// Like [`spawn_comment_action`], handing the refresh to `on_done` before it
/// is applied.
#[cfg(feature = "csr")]
pub fn spawn_comment_action_then<F>(
    comments: RwSignal<CommentsState>,
    backend: HttpBackend,
    action: CommentAction,
    on_done: F,
) where
    F: FnOnce(&Refresh) + 'static,
{
    leptos::task::spawn_local(async move {
        let (stamp, refresh) = run_action(&backend, &action, || {
            let mut load = (0, 0);
            comments.update(|s| load = (s.begin_load(), s.limit));
            load
        })
        .await;
        on_done(&refresh);
        comments.update(|s| {
            if !s.finish_load(stamp, refresh) {
                leptos::logging::log!("dropped stale comment refresh #{stamp}");
            }
        });
    });
}

/// Native builds have no event loop to run requests on.
#[cfg(not(feature = "csr"))]
pub fn spawn_comment_action_then<F>(
    _comments: RwSignal<CommentsState>,
    _backend: HttpBackend,
    _action: CommentAction,
    _on_done: F,
) where
    F: FnOnce(&Refresh) + 'static,
{
}
