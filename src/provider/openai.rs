//! OpenAI Chat Completions API client.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::config::Config;
use crate::error::ConverseError;
use crate::types::{Message, Role, Usage};

use super::http::{bearer_headers, status_to_error};
use super::{ChatProvider, ChatReply, ChatRequest};

/// Client for an OpenAI-compatible `/chat/completions` endpoint.
pub struct OpenAiClient {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl OpenAiClient {
    /// Create a client from resolved configuration.
    pub fn new(config: &Config) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .expect("Failed to build HTTP client");
        Self {
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
            client,
        }
    }

    fn build_request_body(&self, request: &ChatRequest) -> serde_json::Value {
        let messages = request
            .messages
            .iter()
            .map(message_to_openai)
            .collect::<Vec<_>>();

        serde_json::json!({
            "model": request.model,
            "messages": messages,
            "temperature": request.temperature,
        })
    }
}

#[async_trait]
impl ChatProvider for OpenAiClient {
    async fn complete(&self, request: &ChatRequest) -> Result<ChatReply, ConverseError> {
        let body = self.build_request_body(request);
        let url = format!("{}/chat/completions", self.base_url);

        debug!(
            model = request.model.as_str(),
            messages = request.messages.len(),
            "OpenAI complete"
        );

        let resp = self
            .client
            .post(&url)
            .headers(bearer_headers(&self.api_key))
            .json(&body)
            .send()
            .await?;

        let status = resp.status().as_u16();
        if status != 200 {
            let body_text = resp.text().await.unwrap_or_default();
            return Err(status_to_error(status, &body_text));
        }

        let data: OpenAiChatResponse = resp.json().await?;
        let choice = data
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| ConverseError::api(200, "No choices in OpenAI response"))?;

        Ok(ChatReply {
            text: choice.message.content.unwrap_or_default(),
            usage: data
                .usage
                .map(|u| Usage {
                    input_tokens: u.prompt_tokens,
                    output_tokens: u.completion_tokens,
                    total_tokens: u.total_tokens,
                })
                .unwrap_or_default(),
        })
    }
}

fn message_to_openai(msg: &Message) -> serde_json::Value {
    let role = match msg.role {
        Role::System => "system",
        Role::User => "user",
        Role::Assistant => "assistant",
    };
    serde_json::json!({ "role": role, "content": msg.content })
}

// OpenAI API response types (internal)

#[derive(Deserialize)]
struct OpenAiChatResponse {
    choices: Vec<OpenAiChoice>,
    usage: Option<OpenAiUsage>,
}

#[derive(Deserialize)]
struct OpenAiChoice {
    message: OpenAiMessage,
}

#[derive(Deserialize)]
struct OpenAiMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct OpenAiUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}
