//! Token usage reporting.

use serde::{Deserialize, Serialize};

/// Token usage for one completion.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
    pub total_tokens: u32,
}
