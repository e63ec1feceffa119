use super::*;

fn admin() -> Session {
    Session::authenticated("u1", Role::Admin)
}

fn user() -> Session {
    Session::authenticated("u2", Role::User)
}

// =============================================================================
// Role
// =============================================================================

#[test]
fn role_parses_case_insensitively() {
    assert_eq!("admin".parse::<Role>(), Ok(Role::Admin));
    assert_eq!(" USER ".parse::<Role>(), Ok(Role::User));
}

#[test]
fn role_rejects_unknown_label() {
    let err = "chef".parse::<Role>().expect_err("chef is not a role");
    assert_eq!(err, ParseRoleError("chef".to_owned()));
}

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
    let role: Role = serde_json::from_str("\"user\"").unwrap();
    assert_eq!(role, Role::User);
}

// =============================================================================
// Session accessors
// =============================================================================

#[test]
fn session_defaults_to_loading() {
    let session = Session::default();
    assert!(session.is_loading());
    assert!(!session.is_logged_in());
    assert!(session.role().is_none());
    assert!(session.user_id().is_none());
}

#[test]
fn authenticated_session_exposes_identity() {
    let session = admin();
    assert!(!session.is_loading());
    assert!(session.is_logged_in());
    assert_eq!(session.role(), Some(Role::Admin));
    assert_eq!(session.user_id(), Some("u1"));
}

// =============================================================================
// authorize
// =============================================================================

#[test]
fn authorize_refuses_anonymous_and_loading() {
    assert_eq!(authorize(&Session::Anonymous, &[]), Err(Denial::Unauthenticated));
    assert_eq!(authorize(&Session::Loading, &[]), Err(Denial::Unauthenticated));
}

#[test]
fn authorize_empty_roles_admits_any_role() {
    assert_eq!(authorize(&admin(), &[]), Ok(()));
    assert_eq!(authorize(&user(), &[]), Ok(()));
}

#[test]
fn authorize_checks_membership() {
    assert_eq!(authorize(&user(), &[Role::Admin]), Err(Denial::Unauthorized));
    assert_eq!(authorize(&user(), &[Role::Admin, Role::User]), Ok(()));
}

// =============================================================================
// evaluate
// =============================================================================

#[test]
fn loading_session_waits_for_every_policy() {
    for policy in [GatePolicy::authenticated(), GatePolicy::require_roles([Role::Admin])] {
        assert_eq!(evaluate(&Session::Loading, &policy, "/profile"), GateDecision::Wait);
    }
}

#[test]
fn anonymous_redirects_to_login_with_encoded_path() {
    let decision = evaluate(&Session::Anonymous, &GatePolicy::authenticated(), "/admin/create");
    assert_eq!(
        decision,
        GateDecision::Redirect {
            target: "/auth?redirect=%2Fadmin%2Fcreate".to_owned(),
            reason: Denial::Unauthenticated,
        }
    );
}

#[test]
fn anonymous_redirect_encodes_query_in_return_path() {
    let decision = evaluate(&Session::Anonymous, &GatePolicy::authenticated(), "/menu?page=2&cat=main");
    assert_eq!(
        decision.redirect_target(),
        Some("/auth?redirect=%2Fmenu%3Fpage%3D2%26cat%3Dmain")
    );
}

#[test]
fn custom_redirect_with_existing_query_appends_param() {
    let policy = GatePolicy::authenticated().with_redirect_to("/login?tab=code");
    let decision = evaluate(&Session::Anonymous, &policy, "/support");
    assert_eq!(decision.redirect_target(), Some("/login?tab=code&redirect=%2Fsupport"));
}

#[test]
fn signed_in_with_empty_roles_renders_for_any_role() {
    let policy = GatePolicy::authenticated();
    assert!(evaluate(&admin(), &policy, "/profile").is_render());
    assert!(evaluate(&user(), &policy, "/profile").is_render());
}

#[test]
fn user_on_admin_view_goes_to_unauthorized() {
    let policy = GatePolicy::require_roles([Role::Admin]);
    let decision = evaluate(&user(), &policy, "/admin/create");
    assert_eq!(
        decision,
        GateDecision::Redirect { target: "/unauthorized".to_owned(), reason: Denial::Unauthorized }
    );
    assert!(!decision.is_render());
}

#[test]
fn custom_unauthorized_path_is_used() {
    let policy = GatePolicy::require_roles([Role::Admin]).with_unauthorized_path("/403");
    assert_eq!(evaluate(&user(), &policy, "/x").redirect_target(), Some("/403"));
}

#[test]
fn admin_on_admin_view_renders() {
    let policy = GatePolicy::require_roles([Role::Admin]);
    assert_eq!(evaluate(&admin(), &policy, "/admin/create"), GateDecision::Render);
}

#[test]
fn require_roles_dedupes() {
    let policy = GatePolicy::require_roles([Role::Admin, Role::Admin]);
    assert_eq!(policy.required_roles(), &[Role::Admin]);
}

// =============================================================================
// sanitize_return_path
// =============================================================================

#[test]
fn sanitize_keeps_same_origin_paths() {
    assert_eq!(sanitize_return_path(Some("/admin/create")), "/admin/create");
    assert_eq!(sanitize_return_path(Some("/menu?page=2")), "/menu?page=2");
}

#[test]
fn sanitize_rejects_offsite_and_empty_values() {
    assert_eq!(sanitize_return_path(None), "/");
    assert_eq!(sanitize_return_path(Some("   ")), "/");
    assert_eq!(sanitize_return_path(Some("https://evil.example")), "/");
    assert_eq!(sanitize_return_path(Some("//evil.example")), "/");
    assert_eq!(sanitize_return_path(Some("/\\evil.example")), "/");
    assert_eq!(sanitize_return_path(Some("profile")), "/");
    assert_eq!(sanitize_return_path(Some("/a\nb")), "/");
}

// =============================================================================
// NavigationLatch / Gate
// =============================================================================

#[test]
fn gate_never_navigates_while_loading() {
    let mut gate = Gate::new(GatePolicy::authenticated());
    for _ in 0..5 {
        let step = gate.step(&Session::Loading, "/profile");
        assert_eq!(step.decision, GateDecision::Wait);
        assert!(step.navigate.is_none());
    }
}

#[test]
fn gate_navigates_exactly_once_after_resolution() {
    let mut gate = Gate::new(GatePolicy::authenticated());
    let _ = gate.step(&Session::Loading, "/profile");

    let navigations: Vec<_> = (0..4)
        .filter_map(|_| gate.step(&Session::Anonymous, "/profile").navigate)
        .collect();
    assert_eq!(navigations, vec!["/auth?redirect=%2Fprofile".to_owned()]);
}

#[test]
fn gate_renders_without_navigation_for_admin() {
    let mut gate = Gate::new(GatePolicy::require_roles([Role::Admin]));
    let step = gate.step(&admin(), "/admin/create");
    assert_eq!(step.decision, GateDecision::Render);
    assert!(step.navigate.is_none());
}

#[test]
fn latch_rearms_after_decision_changes() {
    let mut gate = Gate::new(GatePolicy::authenticated());
    assert!(gate.step(&Session::Anonymous, "/profile").navigate.is_some());
    assert!(gate.step(&Session::Loading, "/profile").navigate.is_none());
    assert!(gate.step(&Session::Anonymous, "/profile").navigate.is_some());
}

#[test]
fn latch_fires_again_for_a_different_target() {
    let mut latch = NavigationLatch::default();
    let first = GateDecision::Redirect { target: "/a".to_owned(), reason: Denial::Unauthenticated };
    let second = GateDecision::Redirect { target: "/b".to_owned(), reason: Denial::Unauthorized };
    assert_eq!(latch.observe(&first), Some("/a".to_owned()));
    assert_eq!(latch.observe(&first), None);
    assert_eq!(latch.observe(&second), Some("/b".to_owned()));
    assert_eq!(latch.issued(), Some("/b"));
}
