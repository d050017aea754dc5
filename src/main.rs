//! Todo Frontend Entry Point

mod config;
mod logging;
mod context;
mod store;
mod components;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    if let Err(e) = logging::init(log::LevelFilter::Info) {
        web_sys::console::warn_1(&format!("[MAIN] logger already set: {}", e).into());
    }

    let config = AppConfig::load();
    log::set_max_level(config.level_filter());
    log::info!("[MAIN] mounting \"{}\"", config.title);

    mount_to_body(move || view! { <App config=config /> });
}
