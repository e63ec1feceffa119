//! Support chat transcript and composer state.

#[cfg(test)]
#[path = "support_chat_test.rs"]
mod support_chat_test;

use menu::SupportMessage;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SupportChatState {
    pub messages: Vec<SupportMessage>,
    pub draft: String,
    pub sending: bool,
    pub loaded: bool,
    pub error: Option<String>,
}

impl SupportChatState {
    pub fn load_finished(&mut self, result: Result<Vec<SupportMessage>, String>) {
        self.loaded = true;
        match result {
            Ok(messages) => {
                self.messages = messages;
                self.error = None;
            }
            Err(e) => self.error = Some(e),
        }
    }

    /// Validate the draft and mark a send in flight. Returns the trimmed body
    /// to post, or `None` when the draft is rejected or a send is pending.
    pub fn begin_send(&mut self) -> Option<String> {
        if self.sending {
            return None;
        }
        match menu::validate_support_body(&self.draft) {
            Ok(body) => {
                self.sending = true;
                self.error = None;
                Some(body)
            }
            Err(e) => {
                self.error = Some(e.message);
                None
            }
        }
    }

    /// Apply the server's answer to a send. The draft survives failures so the
    /// customer can retry.
    pub fn send_finished(&mut self, result: Result<Vec<SupportMessage>, String>) {
        self.sending = false;
        match result {
            Ok(messages) => {
                self.messages = messages;
                self.draft.clear();
                self.error = None;
            }
            Err(e) => self.error = Some(e),
        }
    }
}
