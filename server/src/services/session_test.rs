use super::*;

// =============================================================================
// bytes_to_hex
// =============================================================================

#[test]
fn bytes_to_hex_empty() {
    assert_eq!(bytes_to_hex(&[]), "");
}

#[test]
fn bytes_to_hex_leading_zero() {
    assert_eq!(bytes_to_hex(&[0x0a]), "0a");
}

#[test]
fn bytes_to_hex_multi_byte() {
    assert_eq!(bytes_to_hex(&[0xde, 0xad, 0xbe, 0xef]), "deadbeef");
}

// =============================================================================
// generate_token
// =============================================================================

#[test]
fn generate_token_is_64_hex_chars() {
    let token = generate_token();
    assert_eq!(token.len(), 64);
    assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn generate_token_two_calls_differ() {
    assert_ne!(generate_token(), generate_token());
}

// =============================================================================
// SessionUser
// =============================================================================

fn sample_user(role: Role) -> SessionUser {
    SessionUser { id: Uuid::nil(), name: "alice".into(), email: "alice@example.com".into(), role }
}

#[test]
fn session_user_maps_to_gate_session() {
    let session = sample_user(Role::Admin).session();
    assert_eq!(session.role(), Some(Role::Admin));
    assert_eq!(session.user_id(), Some("00000000-0000-0000-0000-000000000000"));
}

#[test]
fn session_user_serializes_role_lowercase() {
    let json = serde_json::to_value(sample_user(Role::User)).unwrap();
    assert_eq!(json["role"], "user");
    assert_eq!(json["email"], "alice@example.com");
}

#[test]
fn role_from_column_falls_back_to_user() {
    assert_eq!(role_from_column("admin"), Role::Admin);
    assert_eq!(role_from_column("user"), Role::User);
    assert_eq!(role_from_column("superuser"), Role::User);
}
