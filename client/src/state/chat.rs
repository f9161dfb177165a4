#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

/// Prompts offered as one-click fills for the chat input.
pub const CHAT_SUGGESTIONS: [&str; 3] = [
    "What career should I choose?",
    "How can I improve my success rate?",
    "What skills should I learn?",
];

/// Chat panel state. Only the latest reply is kept.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChatState {
    pub draft: String,
    pub reply: Option<String>,
    pub sending: bool,
}

impl ChatState {
    /// Replace the shown reply with the latest one.
    pub fn apply_reply(&mut self, reply: String) {
        self.sending = false;
        self.reply = Some(reply);
    }

    /// Reply text worth rendering; an empty reply shows nothing.
    pub fn visible_reply(&self) -> Option<&str> {
        self.reply.as_deref().filter(|r| !r.trim().is_empty())
    }
}
