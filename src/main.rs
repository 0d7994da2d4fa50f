//! Pre-Taste Frontend Entry Point

mod models;
mod config;
mod menu;
mod feedback;
mod theme;
mod debounce;
mod commands;
mod context;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    // Apply the theme before mounting to avoid a flash of the wrong scheme
    let initial_theme = theme::init_theme();
    mount_to_body(move || view! { <App initial_theme=initial_theme /> });
}
