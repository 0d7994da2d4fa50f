//! Site Header Component
//!
//! Brand, section navigation and page-level actions (theme, docs, feedback).

use leptos::prelude::*;
use leptos_viewport::scroll_into_view;
use wasm_bindgen::JsCast;

use crate::components::ThemeToggle;
use crate::context::use_app_context;

const NAV_LINKS: &[(&str, &str)] = &[
    ("#home", "Home"),
    ("#menu", "Menu"),
    ("#about", "About"),
];

fn is_activation_key(key: &str) -> bool {
    key == "Enter" || key == " "
}

/// Links don't activate on Space natively; route both keys through click()
fn activate_on_key(ev: web_sys::KeyboardEvent) {
    if !is_activation_key(&ev.key()) {
        return;
    }
    ev.prevent_default();
    if let Some(el) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlElement>().ok()) {
        el.click();
    }
}

#[component]
pub fn SiteHeader() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <header class="site-header">
            <a class="brand" href="#home">
                <span class="brand-mark">"Pre-Taste"</span>
            </a>

            <nav class="site-nav" aria-label="Main navigation">
                {NAV_LINKS.iter().map(|(href, label)| view! {
                    <a class="nav-link" href=*href on:keydown=activate_on_key>{*label}</a>
                }).collect_view()}
            </nav>

            <div class="header-actions">
                <button
                    id="doc-btn"
                    type="button"
                    class="header-btn"
                    on:click=move |_| scroll_into_view(".references-section")
                >
                    "Documentation"
                </button>
                <button
                    id="feedback-btn"
                    type="button"
                    class="header-btn"
                    on:click=move |_| ctx.open_feedback()
                >
                    "Feedback"
                </button>
                <ThemeToggle />
            </div>
        </header>
    }
}
