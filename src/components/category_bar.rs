//! Category Bar Component
//!
//! "All" plus one tab per menu category; selecting a tab re-filters the list.

use leptos::prelude::*;

use crate::menu::{CategoryFilter, ALL_CATEGORIES};
use crate::store::{use_menu_store, MenuStateStoreFields};

#[component]
pub fn CategoryBar() -> impl IntoView {
    let store = use_menu_store();

    let tabs = move || {
        let mut tabs = vec![(ALL_CATEGORIES.to_string(), "All".to_string())];
        tabs.extend(store.categories().get().into_iter().map(|c| (c.id, c.name)));
        tabs
    };

    view! {
        <div class="category-bar" role="tablist" aria-label="Menu categories">
            <For
                each=tabs
                key=|(id, _)| id.clone()
                children=move |(id, name)| {
                    let is_active = {
                        let id = id.clone();
                        move || store.category().get().as_id() == id
                    };
                    let is_active_aria = is_active.clone();
                    let data_id = id.clone();
                    view! {
                        <button
                            type="button"
                            role="tab"
                            class=move || if is_active() { "category-btn active" } else { "category-btn" }
                            data-category=data_id
                            aria-selected=move || is_active_aria().to_string()
                            on:click=move |_| store.category().set(CategoryFilter::from_id(&id))
                        >
                            {name}
                        </button>
                    }
                }
            />
        </div>
    }
}
