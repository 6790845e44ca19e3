use thiserror::Error;

pub type Result<T> = std::result::Result<T, LlmError>;

#[derive(Error, Debug)]
pub enum LlmError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("LLM API error ({status}): {body}")]
    ApiError { status: u16, body: String },

    #[error("Failed to parse LLM response: {0}")]
    ParseError(String),

    #[error("LLM returned an empty response")]
    EmptyResponse,
}
