//! Theme Persistence
//!
//! Light/dark theme stored in `localStorage`, applied as `data-theme` on `<html>`.
//! Falls back to the OS color scheme while no preference is stored.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::config::THEME_STORAGE_KEY;

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Accessible label for the toggle button (describes the action)
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Theme::Light => "Switch to dark mode",
            Theme::Dark => "Switch to light mode",
        }
    }
}

/// Stored preference wins, then the OS scheme, then light
pub fn resolve_theme(stored: Option<&str>, system_dark: bool) -> Theme {
    match stored.and_then(Theme::parse) {
        Some(theme) => theme,
        None if system_dark => Theme::Dark,
        None => Theme::Light,
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Raw stored preference, if any
pub fn stored_theme() -> Option<String> {
    local_storage().and_then(|s| s.get_item(THEME_STORAGE_KEY).ok().flatten())
}

/// Persist the preference; storage failures (private mode, quota) are ignored
pub fn save_theme(theme: Theme) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(THEME_STORAGE_KEY, theme.as_str());
    }
}

fn dark_scheme_query() -> Option<web_sys::MediaQueryList> {
    web_sys::window().and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten())
}

pub fn system_prefers_dark() -> bool {
    dark_scheme_query().map(|mq| mq.matches()).unwrap_or(false)
}

/// Set `data-theme` on the document element
pub fn apply_theme(theme: Theme) {
    if let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
}

/// Resolve and apply the theme before the app mounts
pub fn init_theme() -> Theme {
    let theme = resolve_theme(stored_theme().as_deref(), system_prefers_dark());
    apply_theme(theme);
    theme
}

/// Follow OS scheme changes while the user has not picked a theme
pub fn watch_system_theme<F>(on_change: F)
where
    F: Fn(Theme) + 'static,
{
    let Some(mq) = dark_scheme_query() else { return };

    let on_scheme_change =
        Closure::<dyn FnMut(web_sys::MediaQueryListEvent)>::new(move |ev: web_sys::MediaQueryListEvent| {
            if stored_theme().is_none() {
                on_change(if ev.matches() { Theme::Dark } else { Theme::Light });
            }
        });
    let _ = mq.add_event_listener_with_callback("change", on_scheme_change.as_ref().unchecked_ref());
    on_scheme_change.forget();
}
