//! Chat-completion provider trait and the OpenAI implementation.

pub mod http;
pub mod openai;

pub use openai::OpenAiClient;

use async_trait::async_trait;

use crate::error::ConverseError;
use crate::types::{Message, Usage};

/// A request sent to a chat-completion provider.
///
/// Carries the entire ordered conversation so far; the provider replays it
/// verbatim to the endpoint.
#[derive(Debug, Clone)]
pub struct ChatRequest {
    pub messages: Vec<Message>,
    pub model: String,
    pub temperature: f64,
}

/// The reply from a provider: the first choice's text plus usage.
#[derive(Debug, Clone)]
pub struct ChatReply {
    pub text: String,
    pub usage: Usage,
}

/// A chat-completion backend.
///
/// One operation, one round trip. Implementations hold their own HTTP
/// client and credentials; nothing is read from process globals.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Send the full conversation and return the model's reply.
    async fn complete(&self, request: &ChatRequest) -> Result<ChatReply, ConverseError>;
}

#[async_trait]
impl<P: ChatProvider + ?Sized> ChatProvider for &P {
    async fn complete(&self, request: &ChatRequest) -> Result<ChatReply, ConverseError> {
        (**self).complete(request).await
    }
}
