//! CV Widgets Entry Point

mod actions;
mod app;
mod commands;
mod components;
mod config;
mod context;
mod error;
mod models;
mod sphere;
mod store;
mod theme;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = AppConfig::from_window();
    if console_log::init_with_level(config.log_level()).is_err() {
        web_sys::console::warn_1(&"[APP] Logger already initialised".into());
    }
    if let Some(e) = config_error {
        log::warn!("[APP] {}; using defaults", e);
    }
    log::info!("[APP] Starting, authenticated={}", config.authenticated);

    mount_to_body(move || view! { <App config=config /> });
}
