use axum::http::Request;
use uuid::Uuid;

use super::*;
use crate::state::test_helpers::test_app_state;

fn user(role: Role) -> SessionUser {
    SessionUser { id: Uuid::nil(), name: "pat".into(), email: "pat@example.com".into(), role }
}

// =============================================================================
// check_access
// =============================================================================

#[test]
fn check_access_refuses_anonymous() {
    assert_eq!(check_access(None, &[]), Err(Denial::Unauthenticated));
    assert_eq!(check_access(None, &[Role::Admin]), Err(Denial::Unauthenticated));
}

#[test]
fn check_access_admits_any_role_without_requirement() {
    assert_eq!(check_access(Some(&user(Role::User)), &[]), Ok(()));
    assert_eq!(check_access(Some(&user(Role::Admin)), &[]), Ok(()));
}

#[test]
fn check_access_refuses_user_on_admin_requirement() {
    assert_eq!(check_access(Some(&user(Role::User)), &[Role::Admin]), Err(Denial::Unauthorized));
    assert_eq!(check_access(Some(&user(Role::Admin)), &[Role::Admin]), Ok(()));
}

// =============================================================================
// cookies
// =============================================================================

#[test]
fn session_cookie_is_http_only_and_scoped() {
    let cookie = session_cookie("tok".to_owned(), true);
    assert_eq!(cookie.name(), COOKIE_NAME);
    assert_eq!(cookie.value(), "tok");
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.secure(), Some(true));
    assert_eq!(cookie.path(), Some("/"));
    assert_eq!(cookie.max_age(), Some(Duration::days(30)));
}

#[test]
fn clear_cookie_expires_immediately() {
    let cookie = clear_session_cookie(false);
    assert_eq!(cookie.value(), "");
    assert_eq!(cookie.max_age(), Some(Duration::ZERO));
}

// =============================================================================
// extractors
// =============================================================================

#[tokio::test]
async fn auth_user_without_cookie_is_unauthenticated() {
    let state = test_app_state();
    let (mut parts, ()) = Request::builder().uri("/api/auth/me").body(()).unwrap().into_parts();
    let err = AuthUser::from_request_parts(&mut parts, &state).await.err().expect("should reject");
    assert_eq!(err.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn require_admin_without_cookie_is_unauthenticated() {
    let state = test_app_state();
    let (mut parts, ()) = Request::builder().uri("/api/foods").body(()).unwrap().into_parts();
    let err = RequireAdmin::from_request_parts(&mut parts, &state).await.err().expect("should reject");
    assert_eq!(err.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn request_code_rejects_invalid_email_before_touching_db() {
    let state = test_app_state();
    let result = request_email_code(State(state), Json(RequestCodeBody { email: "nope".to_owned() })).await;
    let err = result.expect_err("invalid email");
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
}

#[test]
fn request_code_response_hides_absent_code() {
    let json = serde_json::to_value(RequestCodeResponse { ok: true, code: None }).unwrap();
    assert_eq!(json, serde_json::json!({ "ok": true }));
}

// =============================================================================
// logout
// =============================================================================

#[test]
fn session_token_ignores_missing_and_empty_cookies() {
    assert_eq!(session_token(&CookieJar::new()), None);
    let empty = CookieJar::new().add(Cookie::new(COOKIE_NAME, ""));
    assert_eq!(session_token(&empty), None);
    let stale = CookieJar::new().add(Cookie::new(COOKIE_NAME, "expired-token"));
    assert_eq!(session_token(&stale), Some("expired-token"));
}

#[tokio::test]
async fn logout_without_session_still_clears_cookie() {
    let state = test_app_state();
    let (jar, status) = logout(State(state), CookieJar::new()).await.expect("logout never needs a session");
    assert_eq!(status, StatusCode::NO_CONTENT);
    let cookie = jar.get(COOKIE_NAME).expect("clearing cookie");
    assert_eq!(cookie.value(), "");
    assert_eq!(cookie.max_age(), Some(Duration::ZERO));
}
