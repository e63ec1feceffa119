//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Protected pages do not gate themselves unless they use
//! the `use_route_protection` hook directly (support); `app` decides how
//! each one is wrapped.

pub mod admin_food;
pub mod food_menu;
pub mod home;
pub mod login;
pub mod not_found;
pub mod profile;
pub mod support;
pub mod unauthorized;
