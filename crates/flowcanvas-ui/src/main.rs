//! WASM entry point, compiled by Trunk.

use flowcanvas_ui::App;
use flowcanvas_ui::config::AppConfig;
use flowcanvas_ui::logging;
use leptos::prelude::*;

fn main() {
    logging::init(&AppConfig::load().log_filter);

    mount_to_body(|| {
        view! {
            <App />
        }
    })
}
