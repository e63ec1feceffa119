//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components take the signals they need as props. Route gating lives in
//! `protected_route` and `util::auth`; everything else is presentation.

pub mod faq_widget;
pub mod food_card;
pub mod loading;
pub mod nav_bar;
pub mod pager;
pub mod protected_route;
