pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod i18n;
pub mod pages;
pub mod utils;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    // Only fails when a logger is already installed.
    let _ = console_log::init_with_level(level);

    leptos::mount_to_body(app::App);
}
