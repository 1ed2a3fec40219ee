//! Agent: a multi-turn conversation against one chat-completion backend.

pub mod agent;
pub mod conversation;

pub use agent::Agent;
pub use conversation::Conversation;
