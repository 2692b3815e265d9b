//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::{
    comment_list::CommentList, find_me::FindMeLink, login_controls::LoginControls, slideshow::Slideshow,
};
use crate::config::SiteConfig;
use crate::net::api::HttpBackend;
use crate::state::{comments::CommentsState, login::LoginViewState};
use crate::util::comment_actions::{CommentAction, spawn_comment_action};
use crate::util::login_status::spawn_login_check;

/// Root application component.
///
/// Provides config, the backend and the shared state signals as context,
/// then loads comments and login status once on mount.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = SiteConfig::from_build_env();
    let backend = HttpBackend::new(&config);
    let comments = RwSignal::new(CommentsState::new(config.default_limit));
    let login = RwSignal::new(LoginViewState::default());

    provide_context(config);
    provide_context(backend.clone());
    provide_context(comments);
    provide_context(login);

    spawn_comment_action(comments, backend.clone(), CommentAction::Reload);
    spawn_login_check(login, backend);

    view! {
        <Title text="Portfolio"/>

        <main class="portfolio">
            <section class="portfolio__find-me">
                <FindMeLink/>
            </section>
            <section class="portfolio__slideshow">
                <Slideshow/>
            </section>
            <section class="portfolio__comments">
                <h2>"Comments"</h2>
                <LoginControls/>
                <CommentList/>
            </section>
        </main>
    }
}
