//! Core Agent struct.

use crate::config::{Config, DEFAULT_TEMPERATURE};
use crate::error::ConverseError;
use crate::provider::{ChatProvider, ChatRequest};

use super::conversation::Conversation;

/// A conversational agent bound to one chat-completion backend.
///
/// Holds the full turn history and replays it on every call. `send` takes
/// `&mut self`, so at most one request is in flight per agent.
pub struct Agent<P: ChatProvider> {
    provider: P,
    model: String,
    temperature: f64,
    conversation: Conversation,
}

impl<P: ChatProvider> Agent<P> {
    /// Create a new agent using the config's model and temperature.
    pub fn new(provider: P, config: &Config) -> Self {
        Self {
            provider,
            model: config.model.clone(),
            temperature: config.temperature,
            conversation: Conversation::new(),
        }
    }

    /// Create an agent with an explicit model id and the default greedy
    /// temperature.
    pub fn with_model(provider: P, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
            temperature: DEFAULT_TEMPERATURE,
            conversation: Conversation::new(),
        }
    }

    /// Seed the conversation with a system instruction.
    ///
    /// A construction-time builder: it must run before the first `send`.
    /// An empty instruction leaves the conversation unseeded.
    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        let prompt = prompt.into();
        if !prompt.is_empty() {
            debug_assert!(
                self.conversation.is_empty(),
                "system prompt must be set before any turns"
            );
            self.conversation = Conversation::with_system(prompt);
        }
        self
    }

    /// Override the decoding temperature.
    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    /// Send a user message and return the assistant's reply.
    ///
    /// Appends the user turn, issues one request carrying the entire
    /// history, appends the reply, and returns its text.
    pub async fn send(&mut self, message: impl Into<String>) -> Result<String, ConverseError> {
        self.conversation.add_user_message(message);

        let request = ChatRequest {
            messages: self.conversation.messages().to_vec(),
            model: self.model.clone(),
            temperature: self.temperature,
        };

        let reply = self.provider.complete(&request).await?;

        self.conversation.add_assistant_message(&reply.text);

        Ok(reply.text)
    }

    /// Get the conversation history.
    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    /// Clear conversation history, keeping any system instruction.
    pub fn clear_history(&mut self) {
        self.conversation.clear();
    }
}
