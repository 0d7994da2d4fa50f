//! Menu Item Card Component

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::config::IMAGE_PLACEHOLDER;
use crate::menu::{card_animation_delay, format_price};
use crate::models::MenuItem;

/// Swap a broken image for the placeholder (once, to avoid error loops)
fn use_placeholder(target: Option<web_sys::EventTarget>) {
    if let Some(img) = target.and_then(|t| t.dyn_into::<web_sys::HtmlImageElement>().ok()) {
        if img.src() != IMAGE_PLACEHOLDER {
            img.set_src(IMAGE_PLACEHOLDER);
        }
    }
}

/// Single dish card
///
/// `leaving` marks the card for the exit transition before the list is replaced.
#[component]
pub fn MenuItemCard(
    item: MenuItem,
    index: usize,
    leaving: ReadSignal<bool>,
) -> impl IntoView {
    let MenuItem { name, description, price, image, category_name, .. } = item;

    view! {
        <div
            class=move || if leaving.get() { "menu-item fade-out" } else { "menu-item" }
            style=format!("animation-delay: {}", card_animation_delay(index))
        >
            <div class="menu-item-image-container">
                <img
                    src=image
                    alt=name.clone()
                    class="menu-item-image"
                    loading="lazy"
                    on:error=move |ev| use_placeholder(ev.target())
                />
                <span class="menu-item-category-tag">{category_name}</span>
            </div>
            <div class="menu-item-content">
                <div class="menu-item-header">
                    <h3 class="menu-item-name">{name}</h3>
                    <span class="menu-item-price">{format_price(price)}</span>
                </div>
                <p class="menu-item-description">{description}</p>
            </div>
        </div>
    }
}
