//! Client state modules.
//!
//! Each module keeps its transitions on a plain struct so they can be unit
//! tested without a reactive runtime; components wrap them in `RwSignal`s.

pub mod cart;
pub mod faq;
pub mod food_form;
pub mod session;
pub mod support_chat;
