//! Leptos Viewport Utilities
//!
//! Scroll-driven helpers for Leptos: one-shot reveal on intersection,
//! scroll-offset tracking and smooth scrolling.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

/// Fraction of the element that must be visible before it is revealed
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.1;

/// Class every reveal wrapper carries
pub const REVEAL_CLASS: &str = "fade-in-section";

/// Call `on_visible` the first time `target` intersects the viewport, then stop observing
pub fn observe_once<F>(target: &web_sys::Element, threshold: f64, on_visible: F)
where
    F: FnOnce() + 'static,
{
    let pending = Rc::new(RefCell::new(Some(on_visible)));
    let fire = {
        let pending = pending.clone();
        move || {
            if let Some(f) = pending.borrow_mut().take() {
                f();
            }
        }
    };

    let on_intersect = {
        let fire = fire.clone();
        Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                    if entry.is_intersecting() {
                        observer.unobserve(&entry.target());
                        fire();
                    }
                }
            },
        )
    };

    let init = web_sys::IntersectionObserverInit::new();
    init.set_root_margin("0px");
    init.set_threshold(&JsValue::from_f64(threshold));

    match web_sys::IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &init) {
        Ok(observer) => observer.observe(target),
        // No IntersectionObserver: show immediately
        Err(_) => fire(),
    }
    on_intersect.forget();
}

/// Class list for a reveal wrapper
pub fn reveal_class(extra: &str, visible: bool) -> String {
    let mut class = String::from(REVEAL_CLASS);
    if !extra.is_empty() {
        class.push(' ');
        class.push_str(extra);
    }
    if visible {
        class.push_str(" visible");
    }
    class
}

/// Section that gains `visible` once scrolled into view
#[component]
pub fn Reveal(
    #[prop(into, optional)] class: String,
    #[prop(into, optional)] id: Option<String>,
    #[prop(optional)] threshold: Option<f64>,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<leptos::html::Section>::new();
    let (visible, set_visible) = signal(false);
    let threshold = threshold.unwrap_or(DEFAULT_REVEAL_THRESHOLD);

    Effect::new(move |_| {
        if let Some(el) = node_ref.get() {
            observe_once(&el, threshold, move || set_visible.set(true));
        }
    });

    view! {
        <section node_ref=node_ref id=id class=move || reveal_class(&class, visible.get())>
            {children()}
        </section>
    }
}

/// Whether a vertical scroll offset is beyond `threshold`
pub fn past_threshold(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Signal tracking whether the window is scrolled past `threshold` pixels
pub fn use_scroll_past(threshold: f64) -> ReadSignal<bool> {
    let (past, set_past) = signal(false);

    let Some(win) = web_sys::window() else { return past };

    let on_scroll = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
        if let Some(win) = web_sys::window() {
            let y = win.scroll_y().unwrap_or(0.0);
            set_past.set(past_threshold(y, threshold));
        }
    });
    let _ = win.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
    on_scroll.forget();

    past
}

/// Smooth-scroll the window back to the top
pub fn scroll_to_top() {
    if let Some(win) = web_sys::window() {
        let opts = web_sys::ScrollToOptions::new();
        opts.set_top(0.0);
        opts.set_behavior(web_sys::ScrollBehavior::Smooth);
        win.scroll_to_with_scroll_to_options(&opts);
    }
}

/// Smooth-scroll the first element matching `selector` into view
pub fn scroll_into_view(selector: &str) {
    let target = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector(selector).ok().flatten());

    if let Some(el) = target {
        let opts = web_sys::ScrollIntoViewOptions::new();
        opts.set_behavior(web_sys::ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&opts);
    }
}
