//! Reusable page widgets.

pub mod accordion;
pub mod clock;
pub mod footer;
pub mod form;
pub mod lightbox;
pub mod navbar;
pub mod search_bar;
pub mod toast;
