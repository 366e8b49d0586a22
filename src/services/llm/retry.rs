use serde::de::DeserializeOwned;
use std::fmt;

use super::client::{LlmError, Prompt, TextGenerator};
use super::extract::{decode_json, ExtractError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
}

impl RetryPolicy {
    pub fn attempts(max_attempts: u32) -> Self {
        Self { max_attempts }
    }
}

/// Why a single attempt did not produce a value.
#[derive(Debug)]
pub enum AttemptFailure {
    Upstream(LlmError),
    EmptyResponse,
    Decode(ExtractError),
}

impl fmt::Display for AttemptFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttemptFailure::Upstream(err) => write!(f, "upstream call failed: {}", err),
            AttemptFailure::EmptyResponse => write!(f, "empty response"),
            AttemptFailure::Decode(err) => write!(f, "decode failed: {}", err),
        }
    }
}

#[derive(Debug)]
pub enum CompletionError {
    Exhausted {
        attempts: u32,
        last_failure: Option<AttemptFailure>,
    },
}

impl fmt::Display for CompletionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompletionError::Exhausted {
                attempts,
                last_failure: Some(failure),
            } => write!(f, "gave up after {} attempts, last: {}", attempts, failure),
            CompletionError::Exhausted {
                attempts,
                last_failure: None,
            } => write!(f, "gave up after {} attempts", attempts),
        }
    }
}

impl std::error::Error for CompletionError {}

/// Calls the generator until `decode` accepts a response or the policy runs out.
///
/// Attempts run back to back with no backoff. Upstream errors, blank output
/// and decode errors all move on to the next attempt.
pub async fn complete_with_retry<T, F>(
    generator: &dyn TextGenerator,
    prompt: &Prompt,
    policy: RetryPolicy,
    decode: F,
) -> Result<T, CompletionError>
where
    F: Fn(&str) -> Result<T, ExtractError>,
{
    let mut last_failure = None;

    for attempt in 1..=policy.max_attempts {
        let failure = match generator.generate(prompt).await {
            Ok(text) if text.trim().is_empty() => AttemptFailure::EmptyResponse,
            Ok(text) => match decode(&text) {
                Ok(value) => {
                    log::debug!("structured completion succeeded: attempt={}", attempt);
                    return Ok(value);
                }
                Err(err) => AttemptFailure::Decode(err),
            },
            Err(err) => AttemptFailure::Upstream(err),
        };

        log::warn!(
            "structured completion attempt failed: attempt={}, max_attempts={}, reason={}",
            attempt,
            policy.max_attempts,
            failure
        );
        last_failure = Some(failure);
    }

    Err(CompletionError::Exhausted {
        attempts: policy.max_attempts,
        last_failure,
    })
}

/// [`complete_with_retry`] decoding the first JSON object in the response.
pub async fn complete_json<T: DeserializeOwned>(
    generator: &dyn TextGenerator,
    prompt: &Prompt,
    policy: RetryPolicy,
) -> Result<T, CompletionError> {
    complete_with_retry(generator, prompt, policy, decode_json::<T>).await
}
