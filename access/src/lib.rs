//! Session model and access-gate policy shared by the UI and the API.
//!
//! This crate owns the one policy function that decides whether a protected
//! view renders, waits for the session to resolve, or redirects. The Leptos
//! route guards (`client`) and the axum extractors (`server`) both call it, so
//! the login/role rules cannot drift between the three UI wrapping styles and
//! the API.
//!
//! The session is read-only here. Whoever resolves credentials owns the
//! writes; the gate only observes.

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Default login route that unauthenticated visitors are sent to.
pub const DEFAULT_LOGIN_PATH: &str = "/auth";
/// Default route for signed-in users whose role is not permitted.
pub const DEFAULT_UNAUTHORIZED_PATH: &str = "/unauthorized";
/// Query parameter carrying the originally requested path through login.
pub const RETURN_PARAM: &str = "redirect";

// =============================================================================
// ROLE
// =============================================================================

/// Coarse-grained permission label attached to a signed-in user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a role string is not one of the known labels.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0:?}")]
pub struct ParseRoleError(pub String);

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "user" => Ok(Self::User),
            _ => Err(ParseRoleError(s.to_owned())),
        }
    }
}

// =============================================================================
// SESSION
// =============================================================================

/// Authentication state of the current visitor.
///
/// `Loading` covers the window before the credential check completes. No
/// user id or role exists in that state, so nothing can make a decision from
/// an unresolved identity.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Session {
    /// Credential check still in flight.
    #[default]
    Loading,
    /// Check finished; nobody is signed in.
    Anonymous,
    /// Check finished with a signed-in user.
    Authenticated { user_id: String, role: Role },
}

impl Session {
    #[must_use]
    pub fn authenticated(user_id: impl Into<String>, role: Role) -> Self {
        Self::Authenticated { user_id: user_id.into(), role }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        match self {
            Self::Authenticated { role, .. } => Some(*role),
            _ => None,
        }
    }

    #[must_use]
    pub fn user_id(&self) -> Option<&str> {
        match self {
            Self::Authenticated { user_id, .. } => Some(user_id),
            _ => None,
        }
    }
}

// =============================================================================
// DENIAL
// =============================================================================

/// Why a session was refused.
///
/// The UI turns both variants into a redirect; the API turns them into
/// 401/403. Neither is retried.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Denial {
    #[error("not authenticated")]
    Unauthenticated,
    #[error("role not permitted")]
    Unauthorized,
}

/// Check a session against a role requirement. An empty `required_roles`
/// admits any signed-in role.
///
/// A `Loading` session is refused as unauthenticated; callers that can wait
/// for resolution (the UI gate) check [`Session::is_loading`] first.
///
/// # Errors
///
/// Returns [`Denial::Unauthenticated`] when nobody is signed in and
/// [`Denial::Unauthorized`] when the role is not in `required_roles`.
pub fn authorize(session: &Session, required_roles: &[Role]) -> Result<(), Denial> {
    match session {
        Session::Loading | Session::Anonymous => Err(Denial::Unauthenticated),
        Session::Authenticated { role, .. } => {
            if required_roles.is_empty() || required_roles.contains(role) {
                Ok(())
            } else {
                Err(Denial::Unauthorized)
            }
        }
    }
}

// =============================================================================
// POLICY
// =============================================================================

/// Per-view access requirements.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GatePolicy {
    required_roles: Vec<Role>,
    redirect_to: String,
    unauthorized_path: String,
}

impl GatePolicy {
    /// Any signed-in user may pass.
    #[must_use]
    pub fn authenticated() -> Self {
        Self {
            required_roles: Vec::new(),
            redirect_to: DEFAULT_LOGIN_PATH.to_owned(),
            unauthorized_path: DEFAULT_UNAUTHORIZED_PATH.to_owned(),
        }
    }

    /// Only the listed roles may pass.
    #[must_use]
    pub fn require_roles(roles: impl IntoIterator<Item = Role>) -> Self {
        let mut required_roles = Vec::new();
        for role in roles {
            if !required_roles.contains(&role) {
                required_roles.push(role);
            }
        }
        Self { required_roles, ..Self::authenticated() }
    }

    #[must_use]
    pub fn with_redirect_to(mut self, path: impl Into<String>) -> Self {
        self.redirect_to = path.into();
        self
    }

    #[must_use]
    pub fn with_unauthorized_path(mut self, path: impl Into<String>) -> Self {
        self.unauthorized_path = path.into();
        self
    }

    #[must_use]
    pub fn required_roles(&self) -> &[Role] {
        &self.required_roles
    }

    #[must_use]
    pub fn redirect_to(&self) -> &str {
        &self.redirect_to
    }

    #[must_use]
    pub fn unauthorized_path(&self) -> &str {
        &self.unauthorized_path
    }
}

impl Default for GatePolicy {
    fn default() -> Self {
        Self::authenticated()
    }
}

// =============================================================================
// DECISION
// =============================================================================

/// What a protected view should do for the current session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GateDecision {
    /// Session unresolved: show a loading indicator, do not navigate.
    Wait,
    /// Render the wrapped view with its original inputs.
    Render,
    /// Navigate away; render the fallback (or nothing) meanwhile.
    Redirect { target: String, reason: Denial },
}

impl GateDecision {
    #[must_use]
    pub fn redirect_target(&self) -> Option<&str> {
        match self {
            Self::Redirect { target, .. } => Some(target),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_render(&self) -> bool {
        matches!(self, Self::Render)
    }
}

/// Decide render / wait / redirect for `current_path` (path plus query).
#[must_use]
pub fn evaluate(session: &Session, policy: &GatePolicy, current_path: &str) -> GateDecision {
    if session.is_loading() {
        return GateDecision::Wait;
    }
    match authorize(session, &policy.required_roles) {
        Ok(()) => GateDecision::Render,
        Err(reason @ Denial::Unauthenticated) => GateDecision::Redirect {
            target: login_redirect(&policy.redirect_to, current_path),
            reason,
        },
        Err(reason @ Denial::Unauthorized) => GateDecision::Redirect {
            target: policy.unauthorized_path.clone(),
            reason,
        },
    }
}

/// Build the login URL carrying `return_path` as an encoded query value.
#[must_use]
pub fn login_redirect(redirect_to: &str, return_path: &str) -> String {
    let sep = if redirect_to.contains('?') { '&' } else { '?' };
    format!("{redirect_to}{sep}{RETURN_PARAM}={}", urlencoding::encode(return_path))
}

/// Turn a `?redirect=` value into a safe post-login destination.
///
/// Only same-origin absolute paths survive; anything else (empty, relative,
/// protocol-relative, backslash tricks, control characters) becomes `/`.
#[must_use]
pub fn sanitize_return_path(raw: Option<&str>) -> String {
    let Some(path) = raw.map(str::trim).filter(|p| !p.is_empty()) else {
        return "/".to_owned();
    };
    let same_origin = path.starts_with('/')
        && !path.starts_with("//")
        && !path.starts_with("/\\")
        && !path.chars().any(char::is_control);
    if same_origin { path.to_owned() } else { "/".to_owned() }
}

// =============================================================================
// NAVIGATION LATCH
// =============================================================================

/// Suppresses duplicate navigations while a redirect decision is unchanged.
///
/// Reactive views re-run on every signal change, and many of those changes
/// produce the same redirect. The latch fires once per distinct redirect and
/// re-arms as soon as the decision stops being that redirect.
#[derive(Clone, Debug, Default)]
pub struct NavigationLatch {
    issued: Option<String>,
}

impl NavigationLatch {
    /// Return the target to navigate to now, if any.
    pub fn observe(&mut self, decision: &GateDecision) -> Option<String> {
        match decision.redirect_target() {
            Some(target) if self.issued.as_deref() == Some(target) => None,
            Some(target) => {
                self.issued = Some(target.to_owned());
                Some(target.to_owned())
            }
            None => {
                self.issued = None;
                None
            }
        }
    }

    #[must_use]
    pub fn issued(&self) -> Option<&str> {
        self.issued.as_deref()
    }
}

/// A policy plus its latch: one per mounted protected view.
///
/// Route guards keep one per mount, re-step it on every session or location
/// change, and navigate only on `GateStep::navigate`.
#[derive(Clone, Debug, Default)]
pub struct Gate {
    policy: GatePolicy,
    latch: NavigationLatch,
}

/// Result of one gate evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GateStep {
    pub decision: GateDecision,
    /// Set only the first time a given redirect is decided.
    pub navigate: Option<String>,
}

impl Gate {
    #[must_use]
    pub fn new(policy: GatePolicy) -> Self {
        Self { policy, latch: NavigationLatch::default() }
    }

    /// Decision only; leaves the latch alone.
    #[must_use]
    pub fn decide(&self, session: &Session, current_path: &str) -> GateDecision {
        evaluate(session, &self.policy, current_path)
    }

    pub fn step(&mut self, session: &Session, current_path: &str) -> GateStep {
        let decision = self.decide(session, current_path);
        let navigate = self.latch.observe(&decision);
        GateStep { decision, navigate }
    }
}
