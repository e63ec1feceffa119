//! UI helpers shared across pages and components.

pub mod auth;
pub mod markdown;
pub mod pagination;
