//! Scripted FAQ bot shown on the home page.
//!
//! DESIGN
//! ======
//! Answers come from a fixed intent table. A question is lowercased, stripped
//! of punctuation, and scored against each intent's keyword phrases; the
//! highest score wins and ties go to the earlier intent. Questions nothing
//! matches get a pointer to the human support chat.

#[cfg(test)]
#[path = "faq_test.rs"]
mod faq_test;

/// One canned topic.
#[derive(Debug)]
pub struct FaqIntent {
    pub id: &'static str,
    /// Whole-word phrases; each hit adds one point.
    pub keywords: &'static [&'static str],
    /// Markdown answer.
    pub answer: &'static str,
    /// Suggested next questions, offered as quick replies.
    pub follow_ups: &'static [&'static str],
}

pub const GREETING: &str =
    "Hi! I can answer questions about **opening hours**, **delivery**, **payment**, **allergens**, and your **orders**.";

pub const FALLBACK_ANSWER: &str =
    "I'm not sure about that one. [Chat with our support team](/support) and a person will get back to you.";

const GREETING_FOLLOW_UPS: &[&str] = &["When are you open?", "Do you deliver?", "How do I pay?"];

pub const INTENTS: &[FaqIntent] = &[
    FaqIntent {
        id: "hours",
        keywords: &["hours", "open", "opening", "close", "closing", "today", "weekend"],
        answer: "We're open **11:00 to 22:00**, Tuesday through Sunday. The kitchen takes its last order 30 minutes before closing.",
        follow_ups: &["Do you deliver?", "Can I order ahead?"],
    },
    FaqIntent {
        id: "delivery",
        keywords: &["deliver", "delivery", "courier", "shipping", "address", "far", "area"],
        answer: "We deliver within **5 km** of the restaurant. Delivery is free on orders over $30; below that it's a flat $3.50.",
        follow_ups: &["How long does delivery take?", "Where is my order?"],
    },
    FaqIntent {
        id: "timing",
        keywords: &["how long", "wait", "eta", "minutes", "take", "fast", "ahead"],
        answer: "Most orders are ready in **20 to 30 minutes**. Delivery adds about 15 minutes depending on distance.",
        follow_ups: &["Where is my order?"],
    },
    FaqIntent {
        id: "payment",
        keywords: &["pay", "payment", "card", "cash", "price", "cost", "tip"],
        answer: "You pay on delivery or at pickup. We take cards and cash.\n\nPrices on the [menu](/menu) include tax.",
        follow_ups: &["Can I cancel an order?"],
    },
    FaqIntent {
        id: "allergens",
        keywords: &["allergy", "allergies", "allergen", "gluten", "nut", "nuts", "vegan", "vegetarian", "dairy"],
        answer: "Every dish description lists its main allergens. We have vegetarian options in every category.\n\nIf you have a severe allergy, please [message support](/support) before ordering.",
        follow_ups: &["Show me the menu"],
    },
    FaqIntent {
        id: "cancel",
        keywords: &["cancel", "refund", "wrong", "missing", "complaint", "change"],
        answer: "Orders can be cancelled until the kitchen starts on them. For refunds or a wrong item, [contact support](/support) with your order number.",
        follow_ups: &["Where is my order?"],
    },
    FaqIntent {
        id: "orders",
        keywords: &["order", "orders", "status", "track", "where", "history", "receipt"],
        answer: "Your past and current orders are on your [profile](/profile). You'll need to be signed in.",
        follow_ups: &["Can I cancel an order?", "How do I sign in?"],
    },
    FaqIntent {
        id: "account",
        keywords: &["sign in", "login", "log in", "account", "password", "code", "email"],
        answer: "There's no password. [Sign in](/auth) with your email and we'll send you a 6-character code.",
        follow_ups: &["Where is my order?"],
    },
    FaqIntent {
        id: "menu",
        keywords: &["menu", "food", "dish", "dishes", "dessert", "drinks", "eat", "special"],
        answer: "Browse the full [menu](/menu). You can filter by starters, mains, sides, desserts and drinks.",
        follow_ups: &["Do you have vegan options?", "How do I pay?"],
    },
];

/// Result of asking the bot something.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaqReply {
    /// Matched intent id; `None` for the fallback.
    pub intent: Option<&'static str>,
    pub answer: &'static str,
    pub follow_ups: &'static [&'static str],
}

/// Lowercase, turn punctuation into spaces, collapse whitespace.
pub fn normalize_question(question: &str) -> String {
    question
        .chars()
        .map(|c| if c.is_alphanumeric() { c.to_ascii_lowercase() } else { ' ' })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn score(intent: &FaqIntent, padded: &str) -> usize {
    intent
        .keywords
        .iter()
        .filter(|phrase| padded.contains(&format!(" {phrase} ")))
        .count()
}

/// Stateless matcher over [`INTENTS`].
#[derive(Clone, Copy, Debug, Default)]
pub struct FaqBot;

impl FaqBot {
    #[must_use]
    pub fn reply(self, question: &str) -> FaqReply {
        let padded = format!(" {} ", normalize_question(question));
        let mut best: Option<(&FaqIntent, usize)> = None;
        for intent in INTENTS {
            let hits = score(intent, &padded);
            if hits > 0 && best.is_none_or(|(_, top)| hits > top) {
                best = Some((intent, hits));
            }
        }
        match best {
            Some((intent, _)) => FaqReply { intent: Some(intent.id), answer: intent.answer, follow_ups: intent.follow_ups },
            None => FaqReply { intent: None, answer: FALLBACK_ANSWER, follow_ups: &[] },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FaqSender {
    Bot,
    Visitor,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FaqMessage {
    pub from: FaqSender,
    /// Markdown for bot messages, plain text for visitor messages.
    pub text: String,
}

/// Widget transcript.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FaqChatState {
    pub open: bool,
    pub messages: Vec<FaqMessage>,
    /// Quick replies offered under the last bot message.
    pub suggestions: Vec<&'static str>,
}

impl FaqChatState {
    /// Closed widget with the greeting already in the transcript.
    #[must_use]
    pub fn new() -> Self {
        Self {
            open: false,
            messages: vec![FaqMessage { from: FaqSender::Bot, text: GREETING.to_owned() }],
            suggestions: GREETING_FOLLOW_UPS.to_vec(),
        }
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Record a question and the bot's answer. Blank input is ignored.
    pub fn ask(&mut self, question: &str) -> Option<FaqReply> {
        let question = question.trim();
        if question.is_empty() {
            return None;
        }
        let reply = FaqBot.reply(question);
        self.messages.push(FaqMessage { from: FaqSender::Visitor, text: question.to_owned() });
        self.messages.push(FaqMessage { from: FaqSender::Bot, text: reply.answer.to_owned() });
        self.suggestions = reply.follow_ups.to_vec();
        Some(reply)
    }
}

impl Default for FaqChatState {
    fn default() -> Self {
        Self::new()
    }
}
