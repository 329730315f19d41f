//! Session lifecycle: durable token storage and the check/refresh flow.
//!
//! The flow functions in [`flow`] are written against the small seams in
//! this module ([`store::TokenStore`] and [`flow::AuthApi`]) so the whole
//! state machine runs natively in unit tests; the browser implementations
//! live in [`store`] and `net::api`.

pub mod flow;
pub mod store;
