use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

// =============================================================================
// parse_bool
// =============================================================================

#[test]
fn parse_bool_true_variants() {
    for val in ["1", "true", "yes", "on", "TRUE", " On "] {
        assert_eq!(parse_bool(val), Some(true), "expected true for {val:?}");
    }
}

#[test]
fn parse_bool_false_variants() {
    for val in ["0", "false", "no", "off", "False"] {
        assert_eq!(parse_bool(val), Some(false), "expected false for {val:?}");
    }
}

#[test]
fn parse_bool_invalid_returns_none() {
    assert_eq!(parse_bool("maybe"), None);
    assert_eq!(parse_bool(""), None);
}

// =============================================================================
// Config::from_lookup
// =============================================================================

#[test]
fn minimal_config_uses_defaults() {
    let config = Config::from_lookup(lookup(&[("DATABASE_URL", "postgres://localhost/food")])).unwrap();
    assert_eq!(config.port, 3000);
    assert_eq!(config.db_max_connections, 5);
    assert!(!config.cookie_secure);
    assert!(config.admin_emails.is_empty());
    assert!(config.email.is_none());
    assert_eq!(config.login_code_limit, 5);
    assert_eq!(config.login_code_window, Duration::from_secs(600));
}

#[test]
fn missing_database_url_is_an_error() {
    let err = Config::from_lookup(lookup(&[])).unwrap_err();
    assert!(matches!(err, ConfigError::Missing("DATABASE_URL")));
}

#[test]
fn invalid_port_is_reported_with_key() {
    let err = Config::from_lookup(lookup(&[("DATABASE_URL", "postgres://x"), ("PORT", "eighty")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { key: "PORT", .. }));
}

#[test]
fn invalid_cookie_secure_is_rejected() {
    let err =
        Config::from_lookup(lookup(&[("DATABASE_URL", "postgres://x"), ("COOKIE_SECURE", "sometimes")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { key: "COOKIE_SECURE", .. }));
}

#[test]
fn resend_key_requires_sender() {
    let err =
        Config::from_lookup(lookup(&[("DATABASE_URL", "postgres://x"), ("RESEND_API_KEY", "re_123")])).unwrap_err();
    assert!(matches!(err, ConfigError::Missing("RESEND_FROM")));

    let config = Config::from_lookup(lookup(&[
        ("DATABASE_URL", "postgres://x"),
        ("RESEND_API_KEY", "re_123"),
        ("RESEND_FROM", "orders@example.com"),
    ]))
    .unwrap();
    assert_eq!(config.email.map(|e| e.from), Some("orders@example.com".to_owned()));
}

#[test]
fn admin_emails_are_normalized() {
    let config = Config::from_lookup(lookup(&[
        ("DATABASE_URL", "postgres://x"),
        ("ADMIN_EMAILS", " Chef@Example.com, ,owner@example.com "),
    ]))
    .unwrap();
    assert_eq!(config.admin_emails, vec!["chef@example.com", "owner@example.com"]);
    assert!(config.is_admin_email("CHEF@example.com"));
    assert!(!config.is_admin_email("guest@example.com"));
}
