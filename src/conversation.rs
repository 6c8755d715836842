//! Chat widget transcript
//!
//! Mirrors what the portfolio's chat widget does with the transcript: it opens
//! with a greeting, marks failed replies by their `Error:` prefix, and can
//! regenerate the last answer.

use crate::llm::{is_error_reply, ChatMessage, ChatRole, ChatService};

pub const GREETING: &str = "Hi there! I'm Youssef's AI Assistant. \n\nI'm here to help you explore his portfolio. You can ask me about his **projects**, **skills**, or his **internship experience**. What would you like to know?";

pub const MISSING_KEY_ALERT: &str = "⚠️ **System Alert: API Key Missing**\n\nTo enable this AI assistant, you need to configure an AI API Key.\n\n1. Create a `.env` file in the project root.\n2. Add: `API_KEY=your_actual_key` (or Gemini Key)\n3. Restart the application.\n\nPlease refer to the **README.md** for detailed setup instructions.";

/// Quick prompts offered while the conversation is young
pub const SUGGESTIONS: [&str; 4] = [
    "Summary of experience",
    "Top technical skills",
    "Details on the AI Project",
    "Contact information",
];

/// Ordered, append-only transcript of one chat session
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
}

impl Conversation {
    /// Start a session with the greeting, plus the setup alert when unconfigured
    pub fn new(configured: bool) -> Self {
        let mut messages = vec![ChatMessage::model(GREETING)];
        if !configured {
            messages.push(ChatMessage::error(MISSING_KEY_ALERT));
        }
        Self { messages }
    }

    /// Rebuild a session from a transcript kept by the client
    pub fn from_messages(messages: Vec<ChatMessage>) -> Self {
        Self { messages }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn into_messages(self) -> Vec<ChatMessage> {
        self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Suggestions stay visible until the visitor has exchanged a message
    pub fn show_suggestions(&self) -> bool {
        self.messages.len() < 3
    }

    /// Send visitor input and append the reply
    ///
    /// Blank input is ignored and returns `None`.
    pub async fn send(&mut self, service: &ChatService, text: &str) -> Option<&ChatMessage> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let history = self.messages.clone();
        self.messages.push(ChatMessage::user(text));
        let reply = service.send_message(&history, text).await;
        self.push_reply(reply)
    }

    /// Ask again for the last user message, replacing a trailing model reply
    ///
    /// Returns `None` when the transcript has no user message.
    pub async fn regenerate(&mut self, service: &ChatService) -> Option<&ChatMessage> {
        let last_user = self.messages.iter().rposition(|m| m.role == ChatRole::User)?;

        if self.messages.last().map(|m| m.role) == Some(ChatRole::Model) {
            self.messages.pop();
        }
        // Anything after the user turn other than the popped reply is discarded too
        self.messages.truncate(last_user + 1);

        let text = self.messages[last_user].text.clone();
        let reply = service
            .send_message(&self.messages[..last_user], &text)
            .await;
        self.push_reply(reply)
    }

    /// Append a model reply, flagging it when it carries an error
    pub fn push_reply(&mut self, text: String) -> Option<&ChatMessage> {
        let message = if is_error_reply(&text) {
            ChatMessage::error(text)
        } else {
            ChatMessage::model(text)
        };
        self.messages.push(message);
        self.messages.last()
    }
}
