//! Back To Top Button Component

use leptos::prelude::*;
use leptos_viewport::{scroll_to_top, use_scroll_past};

use crate::config::BACK_TO_TOP_THRESHOLD;

/// Floating button shown once the page is scrolled down
#[component]
pub fn BackToTop() -> impl IntoView {
    let visible = use_scroll_past(BACK_TO_TOP_THRESHOLD);

    view! {
        <button
            id="back-to-top"
            type="button"
            class=move || if visible.get() { "back-to-top visible" } else { "back-to-top" }
            aria-label="Back to top"
            on:click=move |_| scroll_to_top()
        >
            "\u{2191}"
        </button>
    }
}
