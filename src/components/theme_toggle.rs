//! Theme Toggle Button Component

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::theme::Theme;

/// Toggles between light and dark, persisting the choice
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <button
            id="theme-toggle"
            class="theme-toggle"
            type="button"
            aria-label=move || ctx.theme.get().toggle_label()
            title=move || ctx.theme.get().toggle_label()
            on:click=move |_| ctx.toggle_theme()
        >
            <span class="theme-icon">
                {move || match ctx.theme.get() {
                    Theme::Light => "\u{263E}",
                    Theme::Dark => "\u{2600}",
                }}
            </span>
        </button>
    }
}
