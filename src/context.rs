//! Application Context
//!
//! Shared page-chrome state provided via Leptos Context API.

use leptos::prelude::*;

use crate::theme::{self, Theme};

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Active theme - read
    pub theme: ReadSignal<Theme>,
    /// Active theme - write
    set_theme: WriteSignal<Theme>,
    /// Whether the feedback modal is open - read
    pub feedback_open: ReadSignal<bool>,
    /// Whether the feedback modal is open - write
    set_feedback_open: WriteSignal<bool>,
}

impl AppContext {
    pub fn new(
        theme: (ReadSignal<Theme>, WriteSignal<Theme>),
        feedback_open: (ReadSignal<bool>, WriteSignal<bool>),
    ) -> Self {
        Self {
            theme: theme.0,
            set_theme: theme.1,
            feedback_open: feedback_open.0,
            set_feedback_open: feedback_open.1,
        }
    }

    /// Flip the theme, apply it and persist the choice
    pub fn toggle_theme(&self) {
        let next = self.theme.get_untracked().toggled();
        theme::apply_theme(next);
        theme::save_theme(next);
        self.set_theme.set(next);
    }

    /// Apply a theme without persisting (OS scheme changes)
    pub fn follow_system_theme(&self, next: Theme) {
        theme::apply_theme(next);
        self.set_theme.set(next);
    }

    pub fn open_feedback(&self) {
        self.set_feedback_open.set(true);
    }

    pub fn close_feedback(&self) {
        self.set_feedback_open.set(false);
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
