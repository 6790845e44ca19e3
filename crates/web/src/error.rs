use analysis::AnalysisError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use llm::LlmError;
use serde_json::json;
use std::fmt;

pub const VALIDATION_MESSAGE: &str = "A prompt and a rounds array are required.";
pub const GENERATION_MESSAGE: &str = "Failed to generate analysis. Please try again later.";

/// Web layer errors
#[derive(Debug)]
pub enum WebError {
    Validation(AnalysisError),
    Generation(LlmError),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(e) => write!(f, "{}", e),
            Self::Generation(e) => write!(f, "Generation error: {}", e),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status_code, message) = match &self {
            Self::Validation(e) => {
                tracing::warn!("Rejected analysis request: {}", e);
                (StatusCode::BAD_REQUEST, VALIDATION_MESSAGE)
            }
            Self::Generation(e) => {
                tracing::error!("Generation error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, GENERATION_MESSAGE)
            }
        };

        (status_code, Json(json!({ "error": message }))).into_response()
    }
}

impl From<AnalysisError> for WebError {
    fn from(error: AnalysisError) -> Self {
        Self::Validation(error)
    }
}

impl From<LlmError> for WebError {
    fn from(error: LlmError) -> Self {
        Self::Generation(error)
    }
}

pub type WebResult<T> = Result<T, WebError>;
