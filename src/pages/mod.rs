//! Site pages, one component per route.

pub mod about;
pub mod auth;
pub mod contact;
pub mod enquiry;
pub mod faq;
pub mod gallery;
pub mod home;
