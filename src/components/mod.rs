//! Reusable view components.

pub mod entry_list;
pub mod extraction_popup;
pub mod main_layout;
pub mod navbar;
pub mod protected_route;
