//! JSON Web Frontend
//!
//! Leptos-based WASM frontend: landing page plus login and register forms
//! backed by the external auth API.

mod app;
mod components;
mod pages;
mod routing;
mod storage;

pub use app::App;
pub use routing::RouterNavigator;
pub use storage::LocalStorageTokenStore;

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    console_log::init_with_level(level).ok();

    leptos::mount::mount_to_body(App);
}
