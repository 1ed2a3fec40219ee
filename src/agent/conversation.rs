//! Append-only conversation history.

use crate::types::{Message, Role};

/// Ordered, append-only message history for one agent.
///
/// At most one system message, always first, set at construction.
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    /// Create an empty conversation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a conversation seeded with a system message.
    pub fn with_system(instruction: impl Into<String>) -> Self {
        Self {
            messages: vec![Message::system(instruction)],
        }
    }

    /// Append a user message.
    pub fn add_user_message(&mut self, text: impl Into<String>) {
        self.messages.push(Message::user(text));
    }

    /// Append an assistant message.
    pub fn add_assistant_message(&mut self, text: impl Into<String>) {
        self.messages.push(Message::assistant(text));
    }

    /// All messages in insertion order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Number of messages, including any system message.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the conversation holds no messages.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Drop everything except the initial system message, if any.
    pub fn clear(&mut self) {
        self.messages
            .retain(|m| matches!(m.role, Role::System));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_conversation_is_empty() {
        assert!(Conversation::new().is_empty());
    }

    #[test]
    fn system_message_is_first_and_verbatim() {
        let conv = Conversation::with_system("You are terse.");
        assert_eq!(conv.len(), 1);
        assert_eq!(conv.messages()[0].role, Role::System);
        assert_eq!(conv.messages()[0].content, "You are terse.");
    }

    #[test]
    fn appends_preserve_order() {
        let mut conv = Conversation::with_system("sys");
        conv.add_user_message("first");
        conv.add_assistant_message("second");
        conv.add_user_message("third");

        let roles: Vec<Role> = conv.messages().iter().map(|m| m.role).collect();
        assert_eq!(
            roles,
            vec![Role::System, Role::User, Role::Assistant, Role::User]
        );
    }

    #[test]
    fn clear_keeps_system_message() {
        let mut conv = Conversation::with_system("sys");
        conv.add_user_message("hi");
        conv.add_assistant_message("hello");
        conv.clear();

        assert_eq!(conv.len(), 1);
        assert_eq!(conv.messages()[0].role, Role::System);
    }

    #[test]
    fn clear_without_system_empties() {
        let mut conv = Conversation::new();
        conv.add_user_message("hi");
        conv.clear();
        assert!(conv.is_empty());
    }
}
