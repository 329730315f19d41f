//! Top-level route views.

pub mod browse;
pub mod contribute;
pub mod entry;
pub mod landing;
pub mod login;
pub mod my_entries;
