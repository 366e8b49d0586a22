use futures::future::BoxFuture;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::LlmConfig;

/// A single request to the text-generation service.
#[derive(Debug, Clone, PartialEq)]
pub struct Prompt {
    pub input: String,
    pub web_search: WebSearch,
    pub max_output_tokens: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebSearch {
    Off,
    Allowed,
    Required,
}

impl Prompt {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            web_search: WebSearch::Off,
            max_output_tokens: None,
        }
    }

    pub fn with_web_search(mut self, web_search: WebSearch) -> Self {
        self.web_search = web_search;
        self
    }

    pub fn with_max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.max_output_tokens = Some(max_output_tokens);
        self
    }
}

#[derive(Debug)]
pub enum LlmError {
    HttpError(reqwest::Error),
    ResponseError { status: u16, body: String },
    EmptyOutput,
}

impl fmt::Display for LlmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LlmError::HttpError(err) => write!(f, "HTTP error: {}", err),
            LlmError::ResponseError { status, body } => {
                write!(f, "LLM request failed with status {}: {}", status, body)
            }
            LlmError::EmptyOutput => write!(f, "LLM response contained no output text"),
        }
    }
}

impl std::error::Error for LlmError {}

impl From<reqwest::Error> for LlmError {
    fn from(err: reqwest::Error) -> Self {
        LlmError::HttpError(err)
    }
}

/// Sends a prompt to a text-generation capability and returns its raw text.
pub trait TextGenerator: Send + Sync {
    fn generate<'a>(&'a self, prompt: &'a Prompt) -> BoxFuture<'a, Result<String, LlmError>>;
}

#[derive(Debug, Serialize)]
struct ResponsesRequest<'a> {
    model: &'a str,
    input: &'a str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<Tool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tool_choice: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
}

#[derive(Debug, Serialize)]
struct Tool {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Deserialize)]
struct ResponsesReply {
    #[serde(default)]
    output: Vec<OutputItem>,
}

#[derive(Debug, Deserialize)]
struct OutputItem {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    content: Vec<ContentPart>,
}

#[derive(Debug, Deserialize)]
struct ContentPart {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

impl ResponsesReply {
    /// Joins every `output_text` part of every message item.
    fn output_text(&self) -> String {
        self.output
            .iter()
            .filter(|item| item.kind == "message")
            .flat_map(|item| item.content.iter())
            .filter(|part| part.kind == "output_text")
            .filter_map(|part| part.text.as_deref())
            .collect::<Vec<_>>()
            .join("")
    }
}

/// OpenAI Responses API client.
#[derive(Clone)]
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenAiClient {
    pub fn new(config: &LlmConfig) -> Result<Self, LlmError> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    async fn create_response(&self, prompt: &Prompt) -> Result<String, LlmError> {
        let (tools, tool_choice) = match prompt.web_search {
            WebSearch::Off => (Vec::new(), None),
            WebSearch::Allowed => (vec![Tool { kind: "web_search_preview" }], None),
            WebSearch::Required => (vec![Tool { kind: "web_search_preview" }], Some("required")),
        };

        let request = ResponsesRequest {
            model: &self.model,
            input: &prompt.input,
            tools,
            tool_choice,
            max_output_tokens: prompt.max_output_tokens,
        };

        let response = self
            .client
            .post(format!("{}/responses", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(LlmError::ResponseError {
                status: status.as_u16(),
                body,
            });
        }

        let reply: ResponsesReply = response.json().await?;
        let text = reply.output_text();
        if text.trim().is_empty() {
            return Err(LlmError::EmptyOutput);
        }
        Ok(text)
    }
}

impl TextGenerator for OpenAiClient {
    fn generate<'a>(&'a self, prompt: &'a Prompt) -> BoxFuture<'a, Result<String, LlmError>> {
        Box::pin(self.create_response(prompt))
    }
}
