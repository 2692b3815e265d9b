//! "Find me" button and the link it points somewhere random.

use leptos::prelude::*;

use crate::state::find_me::{Location, pick_location};
use crate::util::random::seeded_rng;

/// Button that points the link below it at a random location.
#[component]
pub fn FindMeLink() -> impl IntoView {
    let rng = StoredValue::new(seeded_rng());
    let picked = RwSignal::new(None::<Location>);

    let on_click = move |_| {
        rng.update_value(|rng| picked.set(Some(pick_location(rng))));
    };

    view! {
        <div class="find-me">
            <button class="btn" on:click=on_click>
                "Find me"
            </button>
            <Show when=move || picked.get().is_some()>
                <a
                    id="link"
                    class="find-me__link"
                    target="_blank"
                    href=move || picked.get().map(|l| l.url).unwrap_or_default()
                >
                    {move || picked.get().map(|l| l.label).unwrap_or_default()}
                </a>
            </Show>
        </div>
    }
}
