//! Loading Screen Component

use leptos::prelude::*;
use leptos::task::spawn_local;
use gloo_timers::future::TimeoutFuture;

use crate::config::LOADING_SCREEN_MS;

/// Splash overlay hidden after a fixed delay
#[component]
pub fn LoadingScreen() -> impl IntoView {
    let (hidden, set_hidden) = signal(false);

    Effect::new(move |_| {
        spawn_local(async move {
            TimeoutFuture::new(LOADING_SCREEN_MS).await;
            set_hidden.set(true);
        });
    });

    view! {
        <div
            id="loading-screen"
            class=move || if hidden.get() { "loading-screen hidden" } else { "loading-screen" }
            aria-hidden=move || hidden.get().to_string()
        >
            <div class="loading-spinner"></div>
            <p class="loading-text">"Preparing the menu..."</p>
        </div>
    }
}
