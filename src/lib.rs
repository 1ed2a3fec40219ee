//! Converse — a minimal conversational agent.
//!
//! Wraps an OpenAI-compatible chat-completions endpoint behind an [`Agent`]
//! that owns an ordered conversation log. Each call appends the user turn,
//! issues one request carrying the full history so far, appends the model's
//! reply, and returns it.
//!
//! # Quick Start
//!
//! ```no_run
//! use converse::prelude::*;
//!
//! # async fn example() -> converse::error::Result<()> {
//! let config = Config::from_env()?;
//! let mut agent = Agent::new(OpenAiClient::new(&config), &config)
//!     .with_system_prompt("You are terse.");
//! let reply = agent.send("Say hi.").await?;
//! println!("{reply}");
//! # Ok(())
//! # }
//! ```
//!
//! [`Agent`]: agent::Agent

pub mod agent;
pub mod config;
pub mod error;
pub mod prelude;
pub mod provider;
pub mod types;
