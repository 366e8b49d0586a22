use serde::de::DeserializeOwned;
use std::fmt;

#[derive(Debug)]
pub enum ExtractError {
    NoJsonObject,
    Malformed(serde_json::Error),
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractError::NoJsonObject => write!(f, "no JSON object found in response"),
            ExtractError::Malformed(err) => write!(f, "malformed JSON: {}", err),
        }
    }
}

impl std::error::Error for ExtractError {}

impl From<serde_json::Error> for ExtractError {
    fn from(err: serde_json::Error) -> Self {
        ExtractError::Malformed(err)
    }
}

/// Returns the span from the first `{` to the last `}`.
///
/// Matching is naive: prose around a single object is dropped, but two
/// sibling objects come back as one span that will not parse.
pub fn extract_json_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

/// Extracts the JSON span from model output and decodes it into `T`.
pub fn decode_json<T: DeserializeOwned>(text: &str) -> Result<T, ExtractError> {
    let span = extract_json_span(text).ok_or(ExtractError::NoJsonObject)?;
    Ok(serde_json::from_str(span)?)
}
