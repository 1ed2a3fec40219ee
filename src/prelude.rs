//! Convenience re-exports for common use.

pub use crate::agent::{Agent, Conversation};
pub use crate::config::Config;
pub use crate::error::{ConverseError, Result};
pub use crate::provider::{ChatProvider, ChatReply, ChatRequest, OpenAiClient};
pub use crate::types::{Message, Role, Usage};
