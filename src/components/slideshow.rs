//! Basil slideshow with a restartable interval timer.

use leptos::prelude::*;

#[cfg(feature = "csr")]
use std::cell::RefCell;
#[cfg(feature = "csr")]
use std::rc::Rc;

#[cfg(feature = "csr")]
use gloo_timers::callback::Interval;

#[cfg(feature = "csr")]
use crate::config::SiteConfig;
use crate::state::slideshow::SlideshowState;

/// Image that steps through the basil photos when "Grow" is pressed.
///
/// Pressing "Grow" again mid-run cancels the running timer and starts over.
#[component]
pub fn Slideshow() -> impl IntoView {
    let show = RwSignal::new(SlideshowState::default());

    #[cfg(feature = "csr")]
    let interval_ms = expect_context::<SiteConfig>().slide_interval_ms;
    #[cfg(feature = "csr")]
    let timer = Rc::new(RefCell::new(None::<Interval>));

    // Drop the timer once a run has finished; dropping cancels it.
    #[cfg(feature = "csr")]
    {
        let timer = Rc::clone(&timer);
        Effect::new(move || {
            if !show.with(|s| s.running) {
                timer.borrow_mut().take();
            }
        });
    }

    let on_grow = move |_| {
        leptos::logging::log!("Let's grow some basil");
        #[cfg(feature = "csr")]
        {
            let mut run = 0;
            show.update(|s| run = s.start());
            let tick = Interval::new(interval_ms, move || {
                show.update(|s| {
                    s.tick(run);
                });
            });
            // Replacing the handle cancels the previous run's timer.
            *timer.borrow_mut() = Some(tick);
        }
        #[cfg(not(feature = "csr"))]
        show.update(|s| {
            s.start();
        });
    };

    view! {
        <div class="slideshow">
            <button class="btn" on:click=on_grow>
                "Grow"
            </button>
            <img
                id="basil"
                class="slideshow__image"
                src=move || show.with(|s| s.current_slide().src)
                alt=move || show.with(|s| s.current_slide().alt)
            />
            <p id="endMsg" class="slideshow__end">
                {move || show.with(|s| s.completion_message().unwrap_or_default())}
            </p>
        </div>
    }
}
