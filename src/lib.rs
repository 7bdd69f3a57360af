#![recursion_limit = "256"]
// lib.rs - Root module for the inventory_dashboard library
//
// The whole application lives under web_app; the SSR binary and the WASM
// hydration entry both pull from there.

pub mod web_app;

cfg_if::cfg_if! {
    if #[cfg(feature = "hydrate")] {
        use wasm_bindgen::prelude::wasm_bindgen;

        #[wasm_bindgen]
        pub fn hydrate() {
            console_error_panic_hook::set_once();
            leptos::mount::hydrate_body(web_app::App);
        }
    }
}
