//! `shopfront-web`
//!
//! **Responsibility:** browser frontend for product entry.
//!
//! This crate provides:
//! - The form controller state machine (no DOM types, testable natively)
//! - The notification contract the form fires into
//! - The Leptos page shell and product form (wasm32 only)
//!
//! The frontend is a **thin shell** around the catalog API: one page, one
//! form, one outbound call per submission.

pub mod form;
pub mod notify;

#[cfg(target_arch = "wasm32")]
pub mod app;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// WASM entry point for the frontend.
/// This is called automatically when the WASM module loads.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    leptos::mount_to_body(app::App);
}
