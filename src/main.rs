//! AgriFuture Frontend Entry Point

mod models;
mod fixtures;
mod tasks;
mod settings;
mod store;
mod chart;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let settings = settings::init_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== AgriFuture dashboard starting ===");
    log::debug!("Settings: {:?}", settings);

    mount_to_body(App);
}
