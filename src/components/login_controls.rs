//! Login link plus the comment controls reserved for signed-in viewers.

use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::net::api::HttpBackend;
use crate::state::comments::{CommentsState, Refresh, validate_comment_input};
use crate::state::login::LoginViewState;
use crate::util::comment_actions::{CommentAction, spawn_comment_action, spawn_comment_action_then};

/// Mounts delete-all, the submission form and a log-out link when signed in,
/// or just a log-in link otherwise. Nothing is mounted until the first
/// status check succeeds.
#[component]
pub fn LoginControls() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let backend = expect_context::<HttpBackend>();
    let comments = expect_context::<RwSignal<CommentsState>>();
    let login = expect_context::<RwSignal<LoginViewState>>();

    let draft = RwSignal::new(String::new());
    let notice = RwSignal::new(String::new());
    let max_chars = config.max_comment_chars;

    let submit = {
        let backend = backend.clone();
        Callback::new(move |()| match validate_comment_input(&draft.get_untracked(), max_chars) {
            Ok(text) => {
                notice.set(String::new());
                let submitted = text.clone();
                spawn_comment_action_then(comments, backend.clone(), CommentAction::Submit(text), move |refresh: &Refresh| {
                    if draft.with_untracked(|d| refresh.clears_draft(d, &submitted)) {
                        draft.set(String::new());
                    }
                });
            }
            Err(e) => notice.set(e.to_string()),
        })
    };

    let delete_all = Callback::new(move |()| {
        spawn_comment_action(comments, backend.clone(), CommentAction::DeleteAll);
    });

    view! {
        <div class="login-controls">
            {move || {
                login
                    .with(LoginViewState::controls)
                    .map(|controls| {
                        let delete_button = controls
                            .delete_all
                            .then(|| {
                                view! {
                                    <button class="btn btn--danger" on:click=move |_| delete_all.run(())>
                                        "Delete"
                                    </button>
                                }
                            });
                        let submission_form = controls
                            .submit_form
                            .then(|| {
                                view! {
                                    <form
                                        id="comment-submission-form"
                                        class="comment-form"
                                        on:submit=move |ev: leptos::ev::SubmitEvent| {
                                            ev.prevent_default();
                                            submit.run(());
                                        }
                                    >
                                        <input
                                            id="new-comment"
                                            class="comment-form__input"
                                            type="text"
                                            placeholder="Leave a comment: "
                                            prop:value=move || draft.get()
                                            on:input=move |ev| draft.set(event_target_value(&ev))
                                        />
                                        <button class="btn btn--primary" type="submit">
                                            "Submit"
                                        </button>
                                    </form>
                                }
                            });
                        let link = controls.auth_link;
                        view! {
                            <div id="delete-container">{delete_button}</div>
                            {submission_form}
                            <div id="login-container">
                                <a href=link.href>{link.label}</a>
                            </div>
                        }
                    })
            }}
            {move || {
                login
                    .with(LoginViewState::status_line)
                    .map(|line| view! { <p class="login-controls__status">{line}</p> })
            }}
            <Show when=move || !notice.get().is_empty()>
                <p class="login-controls__notice">{move || notice.get()}</p>
            </Show>
        </div>
    }
}
