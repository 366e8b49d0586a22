pub mod client;
pub mod extract;
pub mod prompts;
pub mod retry;

pub use client::{LlmError, OpenAiClient, Prompt, TextGenerator, WebSearch};
pub use extract::{decode_json, extract_json_span, ExtractError};
pub use retry::{complete_json, complete_with_retry, AttemptFailure, CompletionError, RetryPolicy};
