//! Todo Web Frontend Entry Point

mod models;
mod todos;
mod filter;
mod dates;
mod composer;
mod editor;
mod confirm;
mod config;
mod context;
mod store;
mod components;
mod app;

use app::App;
use config::UiConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match UiConfig::load() {
        Ok(config) => (config, None),
        Err(err) => (UiConfig::default(), Some(err)),
    };
    let level = config.level_filter().unwrap_or(log::LevelFilter::Info);
    if console_logger::init(level, config.log_capacity).is_err() {
        web_sys::console::warn_1(&wasm_bindgen::JsValue::from_str("[APP] Logger already installed"));
    }
    if let Some(err) = config_error {
        log::warn!("[CONFIG] {}, using defaults", err);
    }
    log::info!("[APP] Starting {}", config.title);

    mount_to_body(move || view! { <App config=config /> });
}
