//! Browser networking.
//!
//! `api` wraps the JSON endpoints; `types` holds client-only DTOs. Menu and
//! order payloads are shared with the server through the `menu` crate.

pub mod api;
pub mod types;
