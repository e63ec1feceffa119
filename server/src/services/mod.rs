//! Domain services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own business logic and persistence concerns so route
//! handlers can stay focused on request decoding and access checks.

pub mod email_auth;
pub mod food;
pub mod order;
pub mod session;
pub mod support;
