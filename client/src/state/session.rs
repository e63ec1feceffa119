//! Session provider for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` creates exactly one `SessionStore` and hands it to every page and
//! gate that needs it. The store starts out resolving, asks `/api/auth/me`
//! once on the client, and settles on either a user or nobody. A failed
//! lookup counts as nobody, so gates never wait forever on a dead request.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use access::Session;
use leptos::prelude::*;

use crate::net::types::User;

/// Snapshot of who is signed in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<User>,
    pub loading: bool,
}

impl SessionState {
    /// Initial state before the first `/api/auth/me` answer.
    #[must_use]
    pub fn resolving() -> Self {
        Self { user: None, loading: true }
    }

    #[must_use]
    pub fn resolved(user: Option<User>) -> Self {
        Self { user, loading: false }
    }

    /// The three-state view consumed by route gates.
    #[must_use]
    pub fn session(&self) -> Session {
        if self.loading {
            return Session::Loading;
        }
        self.user.as_ref().map_or(Session::Anonymous, User::session)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::resolving()
    }
}

/// Reactive handle over [`SessionState`]. Cheap to copy into props.
#[derive(Clone, Copy)]
pub struct SessionStore {
    state: RwSignal<SessionState>,
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self { state: RwSignal::new(SessionState::resolving()) }
    }

    /// Gate-facing session signal.
    #[must_use]
    pub fn session(self) -> Signal<Session> {
        let state = self.state;
        Signal::derive(move || state.with(SessionState::session))
    }

    /// Current session without subscribing; for event handlers.
    #[must_use]
    pub fn snapshot(self) -> Session {
        self.state.with_untracked(SessionState::session)
    }

    /// Current user, tracked.
    #[must_use]
    pub fn user(self) -> Option<User> {
        self.state.with(|s| s.user.clone())
    }

    #[must_use]
    pub fn is_loading(self) -> bool {
        self.state.with(|s| s.loading)
    }

    /// Ask the server who we are. No-op during SSR, where the session stays
    /// loading and gates render their placeholder.
    pub fn resolve(self) {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let user = crate::net::api::fetch_current_user().await;
            log::debug!("session resolved: signed_in={}", user.is_some());
            self.state.set(SessionState::resolved(user));
        });
    }

    /// Record a successful sign-in.
    pub fn sign_in(self, user: User) {
        self.state.set(SessionState::resolved(Some(user)));
    }

    /// Forget the local user without calling the server, e.g. after a 401.
    pub fn expire(self) {
        self.state.set(SessionState::resolved(None));
    }

    /// End the session on the server, then locally.
    pub fn logout(self) {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::net::api::logout().await;
            self.expire();
        });
        #[cfg(not(feature = "hydrate"))]
        self.expire();
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
