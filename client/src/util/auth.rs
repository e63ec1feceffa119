//! Route protection.
//!
//! SYSTEM CONTEXT
//! ==============
//! Three ways to protect a view, all backed by `access::evaluate`:
//!
//! - `use_route_protection`: hook returning the live decision; the caller
//!   picks what to render.
//! - `with_auth`: wraps a page constructor for use as a `Route` view.
//! - `components::protected_route::ProtectedRoute`: declarative wrapper
//!   around children.
//!
//! Each takes the session explicitly. Navigation goes through an
//! `access::Gate`, so a redirect fires once per distinct target no matter
//! how often the session signal re-runs the gate.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use access::{Gate, GateDecision, GatePolicy, Session};
use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::loading::LoadingIndicator;
use crate::state::session::SessionStore;

/// Path plus query string as the router reports them. `search` may or may
/// not carry its leading `?`.
pub fn current_path(pathname: &str, search: &str) -> String {
    let query = search.strip_prefix('?').unwrap_or(search);
    if query.is_empty() { pathname.to_owned() } else { format!("{pathname}?{query}") }
}

/// Navigation the gate asks for after the session or location changed.
///
/// This is the whole body of the redirect effect in `use_route_protection`.
pub fn next_navigation(gate: &mut Gate, session: &Session, here: &str) -> Option<String> {
    gate.step(session, here).navigate
}

/// Evaluate `policy` against `session` for the current route and perform at
/// most one navigation per distinct redirect.
///
/// Must be called inside a `Router`.
pub fn use_route_protection(session: Signal<Session>, policy: GatePolicy) -> Signal<GateDecision> {
    let location = use_location();
    let here = Memo::new(move |_| current_path(&location.pathname.get(), &location.search.get()));
    let gate = StoredValue::new(Gate::new(policy));
    let decision = Memo::new(move |_| {
        let session = session.get();
        let here = here.get();
        gate.try_with_value(|g| g.decide(&session, &here)).unwrap_or(GateDecision::Wait)
    });

    let navigate = use_navigate();
    Effect::new(move || {
        let session = session.get();
        let here = here.get();
        let Some(target) = gate.try_update_value(|g| next_navigation(g, &session, &here)).flatten() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        log::info!("route gate redirecting to {target}");
        navigate(&target, NavigateOptions { replace: true, ..Default::default() });
    });

    decision.into()
}

/// Render `content` only when the gate says so: a loading indicator while
/// the session resolves, `fallback` while a redirect is pending.
pub fn gated_view<F>(decision: Signal<GateDecision>, fallback: ViewFn, content: F) -> impl IntoView
where
    F: Fn() -> AnyView + Send + Sync + 'static,
{
    move || match decision.get() {
        GateDecision::Wait => view! { <LoadingIndicator/> }.into_any(),
        GateDecision::Redirect { .. } => fallback.run(),
        GateDecision::Render => content(),
    }
}

/// Wrap a page constructor so it only renders for sessions `policy` admits.
///
/// The returned closure is a valid `Route` view; the page is built with its
/// own inputs untouched whenever access is granted.
pub fn with_auth<F, V>(page: F, session: SessionStore, policy: GatePolicy) -> impl Fn() -> AnyView + Clone + Send + Sync + 'static
where
    F: Fn() -> V + Clone + Send + Sync + 'static,
    V: IntoView + 'static,
{
    move || {
        let decision = use_route_protection(session.session(), policy.clone());
        let page = page.clone();
        gated_view(decision, ViewFn::default(), move || page().into_any()).into_any()
    }
}
