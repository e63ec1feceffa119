//! Declarative route guard.

use access::{GatePolicy, Role};
use leptos::prelude::*;

use crate::state::session::SessionStore;
use crate::util::auth::{gated_view, use_route_protection};

/// Render `children` only for a session that passes the guard.
///
/// With no `roles`, any signed-in user passes. Anonymous visitors are sent to
/// `redirect_to` (default `/auth`) with the current path attached; signed-in
/// users without a required role go to `/unauthorized`.
#[component]
pub fn ProtectedRoute(
    session: SessionStore,
    #[prop(optional)] roles: Vec<Role>,
    #[prop(optional, into)] redirect_to: Option<String>,
    #[prop(optional, into)] fallback: ViewFn,
    children: ChildrenFn,
) -> impl IntoView {
    let mut policy = GatePolicy::require_roles(roles);
    if let Some(path) = redirect_to {
        policy = policy.with_redirect_to(path);
    }
    let decision = use_route_protection(session.session(), policy);
    gated_view(decision, fallback, move || children())
}
