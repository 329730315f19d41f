//! # triedthat-client
//!
//! Leptos + WASM client for triedthat.io, a social site where signed-in
//! users share short written "experience" entries. LinkedIn OAuth handles
//! identity; the session is a bearer token pair with a refresh-once
//! validation flow.
//!
//! The crate compiles on the host with no features enabled (browser
//! facilities are stubbed and the session state machine is unit tested
//! natively) and targets the browser with the `hydrate` feature.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod services;
pub mod session;
pub mod state;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    leptos::mount::hydrate_body(app::App);
}
