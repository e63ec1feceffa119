use super::*;

fn message(author: SupportAuthor) -> SupportMessage {
    SupportMessage {
        id: "m".to_owned(),
        author,
        body: "hello".to_owned(),
        created_at: "2026-10-16T12:00:00Z".to_owned(),
    }
}

#[test]
fn empty_or_customer_only_thread_needs_ack() {
    assert!(needs_acknowledgement(&[]));
    assert!(needs_acknowledgement(&[message(SupportAuthor::Customer)]));
}

#[test]
fn thread_with_agent_reply_needs_no_ack() {
    assert!(!needs_acknowledgement(&[message(SupportAuthor::Customer), message(SupportAuthor::Agent)]));
}

#[test]
fn author_column_round_trips() {
    for author in [SupportAuthor::Customer, SupportAuthor::Agent] {
        assert_eq!(author_from_column(author_column(author)).unwrap(), author);
    }
}

#[test]
fn unknown_author_is_a_decode_error() {
    assert!(matches!(author_from_column("bot"), Err(sqlx::Error::Decode(_))));
}
