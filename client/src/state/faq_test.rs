use super::*;

fn intent_for(question: &str) -> Option<&'static str> {
    FaqBot.reply(question).intent
}

#[test]
fn normalize_question_strips_punctuation_and_case() {
    assert_eq!(normalize_question("  When are you OPEN?? "), "when are you open");
    assert_eq!(normalize_question("sign-in, please!"), "sign in please");
}

#[test]
fn reply_matches_single_keyword() {
    assert_eq!(intent_for("When are you open?"), Some("hours"));
    assert_eq!(intent_for("Do you deliver?"), Some("delivery"));
    assert_eq!(intent_for("How do I pay?"), Some("payment"));
    assert_eq!(intent_for("Do you have vegan options?"), Some("allergens"));
}

#[test]
fn reply_matches_multi_word_phrase() {
    assert_eq!(intent_for("How do I sign in?"), Some("account"));
}

#[test]
fn reply_prefers_higher_score() {
    // "delivery" hits one intent, "how long" + "take" hit another twice.
    assert_eq!(intent_for("How long does delivery take?"), Some("timing"));
    assert_eq!(intent_for("Where is my order?"), Some("orders"));
}

#[test]
fn reply_breaks_ties_by_table_order() {
    assert_eq!(intent_for("Can I cancel an order?"), Some("cancel"));
}

#[test]
fn keywords_match_whole_words_only() {
    // "opener" must not count as "open".
    assert_eq!(intent_for("bottle opener"), None);
}

#[test]
fn unknown_question_falls_back_to_support() {
    let reply = FaqBot.reply("What's the weather like?");
    assert_eq!(reply.intent, None);
    assert_eq!(reply.answer, FALLBACK_ANSWER);
    assert!(reply.answer.contains("/support"));
    assert!(reply.follow_ups.is_empty());
}

#[test]
fn every_follow_up_has_an_answer() {
    for intent in INTENTS {
        for question in intent.follow_ups {
            assert!(intent_for(question).is_some(), "{question} from {} is unanswered", intent.id);
        }
    }
    for question in GREETING_FOLLOW_UPS {
        assert!(intent_for(question).is_some(), "{question} is unanswered");
    }
}

#[test]
fn chat_starts_closed_with_greeting() {
    let chat = FaqChatState::new();
    assert!(!chat.open);
    assert_eq!(chat.messages.len(), 1);
    assert_eq!(chat.messages[0].from, FaqSender::Bot);
    assert!(!chat.suggestions.is_empty());
}

#[test]
fn ask_appends_question_and_answer() {
    let mut chat = FaqChatState::new();
    let reply = chat.ask("  Do you deliver? ").unwrap();
    assert_eq!(chat.messages.len(), 3);
    assert_eq!(chat.messages[1], FaqMessage { from: FaqSender::Visitor, text: "Do you deliver?".into() });
    assert_eq!(chat.messages[2].text, reply.answer);
    assert_eq!(chat.suggestions, reply.follow_ups.to_vec());
}

#[test]
fn ask_ignores_blank_input() {
    let mut chat = FaqChatState::new();
    assert!(chat.ask("   ").is_none());
    assert_eq!(chat.messages.len(), 1);
}

#[test]
fn toggle_flips_open() {
    let mut chat = FaqChatState::new();
    chat.toggle();
    assert!(chat.open);
    chat.toggle();
    assert!(!chat.open);
}
