//! Pure client-side state and logic modules.
//!
//! DESIGN
//! ======
//! Every piece of behavior with a decision in it lives here, browser-free,
//! so it can be unit-tested on the host: validation rules, search matching,
//! the enquiry calculator, the accordion and lightbox state machines, the
//! auth demo record handling, and the toast generation counter. Components
//! only wire DOM events to these functions.

pub mod accordion;
pub mod auth;
pub mod calc;
pub mod filter;
pub mod form;
pub mod lightbox;
pub mod toast;
pub mod validate;
