//! Comment list with per-comment like buttons and a limit selector.

use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::net::api::HttpBackend;
use crate::state::comments::{CommentRow, CommentsState};
use crate::util::comment_actions::{CommentAction, spawn_comment_action};

/// Renders one row per fetched comment.
///
/// Rows are rebuilt from `CommentsState` on every refresh, so re-rendering
/// never duplicates them. A failed refresh keeps the previous rows and shows
/// the error underneath.
#[component]
pub fn CommentList() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let backend = expect_context::<HttpBackend>();
    let comments = expect_context::<RwSignal<CommentsState>>();

    let max_limit = config.max_limit.to_string();

    let on_limit = {
        let backend = backend.clone();
        move |ev: leptos::ev::Event| {
            let limit = config.parse_limit_input(&event_target_value(&ev));
            comments.update(|s| s.limit = limit);
            spawn_comment_action(comments, backend.clone(), CommentAction::Reload);
        }
    };

    view! {
        <div class="comments__list">
            <label class="comments__limit">
                "Show "
                <input
                    id="limit"
                    type="number"
                    min="0"
                    max=max_limit
                    prop:value=move || comments.with(|s| s.limit.to_string())
                    on:change=on_limit
                />
                " comments"
            </label>
            <div id="comments-container">
                {move || {
                    comments
                        .with(CommentsState::rows)
                        .into_iter()
                        .map(|row| view! { <CommentRowView row=row backend=backend.clone()/> })
                        .collect::<Vec<_>>()
                }}
            </div>
            <Show when=move || comments.with(|s| s.loading)>
                <p class="comments__loading">"Loading comments..."</p>
            </Show>
            <Show when=move || comments.with(|s| s.error.is_some())>
                <p class="comments__error">
                    {move || comments.with(|s| s.error.clone().unwrap_or_default())}
                </p>
            </Show>
        </div>
    }
}

/// A single comment: text, like count, optional author and a like button.
#[component]
fn CommentRowView(row: CommentRow, backend: HttpBackend) -> impl IntoView {
    let comments = expect_context::<RwSignal<CommentsState>>();
    let label = row.label();

    let like_button = row.like_target.map(|id| {
        view! {
            <button
                class="comment__like"
                on:click=move |_| spawn_comment_action(comments, backend.clone(), CommentAction::Like(id))
            >
                "👍"
            </button>
        }
    });

    view! {
        <div class="comment-container">
            <span class="comment__text">{label}</span>
            {row.author.map(|author| view! { <span class="comment__author">{author}</span> })}
            {like_button}
        </div>
    }
}
