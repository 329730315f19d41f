//! Backend communication: wire types, request helpers, and configuration.

pub mod api;
pub mod config;
pub mod types;
