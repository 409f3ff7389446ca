#![allow(warnings)]
//! CreatorGrid Frontend Entry Point

mod models;
mod local_storage;
mod context;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;
use rolling_logger::LoggerConfig;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = rolling_logger::init_logger(LoggerConfig::default().level(log::LevelFilter::Debug)) {
        web_sys::console::error_1(&format!("[APP] Logger init failed: {}", e).into());
    }
    let _ = rolling_logger::info("CreatorGrid starting");
    mount_to_body(App);
}
