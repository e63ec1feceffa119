use super::*;

#[test]
fn user_deserializes_from_me_payload() {
    let json = r#"{"id":"u-1","name":"Ada","email":"ada@example.com","role":"admin"}"#;
    let user: User = serde_json::from_str(json).unwrap();
    assert_eq!(user.role, Role::Admin);
    assert!(user.is_admin());
    assert_eq!(user.session(), Session::authenticated("u-1", Role::Admin));
}

#[test]
fn user_with_unknown_role_is_rejected() {
    let json = r#"{"id":"u-1","name":"Ada","email":"ada@example.com","role":"owner"}"#;
    assert!(serde_json::from_str::<User>(json).is_err());
}

#[test]
fn api_failure_reads_error_and_fields() {
    let body = r#"{"error":"validation failed","fields":[{"field":"price","message":"too high"}]}"#;
    let failure = ApiFailure::from_body(422, body);
    assert_eq!(failure.status, 422);
    assert_eq!(failure.message, "validation failed");
    assert_eq!(failure.field("price"), Some("too high"));
    assert_eq!(failure.field("name"), None);
}

#[test]
fn api_failure_falls_back_on_unparseable_body() {
    let failure = ApiFailure::from_body(502, "<html>bad gateway</html>");
    assert_eq!(failure.message, "request failed: 502");
    assert!(failure.fields.is_empty());
}

#[test]
fn api_failure_detects_unauthenticated() {
    assert!(ApiFailure::from_body(401, r#"{"error":"sign in required"}"#).is_unauthenticated());
    assert!(!ApiFailure::network("offline").is_unauthenticated());
}
