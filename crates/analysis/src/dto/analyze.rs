use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use validator::Validate;

use crate::error::{AnalysisError, Result};
use crate::models::RawRound;
use crate::models::round::lenient;

/// Request payload for a round analysis
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct AnalyzeRequest {
    /// Question about the rounds, passed to the model verbatim.
    #[serde(default, deserialize_with = "lenient")]
    #[validate(
        required(message = "Prompt is required"),
        length(min = 1, message = "Prompt must not be empty")
    )]
    pub prompt: Option<String>,

    /// Rounds to analyze. Must be an array; may be empty.
    #[serde(default)]
    #[schema(value_type = Vec<RawRound>)]
    pub rounds: Option<Value>,
}

/// A request that passed validation, ready for prompt assembly.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisInput {
    pub question: String,
    pub rounds: Vec<RawRound>,
}

impl AnalyzeRequest {
    /// Checks the prompt first, then the rounds array. Individual rounds are
    /// never rejected.
    pub fn into_input(self) -> Result<AnalysisInput> {
        self.validate()
            .map_err(|e| AnalysisError::Validation(e.to_string()))?;

        let question = self
            .prompt
            .ok_or_else(|| AnalysisError::Validation("prompt: Prompt is required".to_string()))?;

        let rounds = match self.rounds {
            Some(Value::Array(items)) => items.into_iter().map(RawRound::from_value).collect(),
            _ => {
                return Err(AnalysisError::Validation(
                    "rounds: Rounds must be an array".to_string(),
                ));
            }
        };

        Ok(AnalysisInput { question, rounds })
    }
}

/// Response wrapping the model's text unchanged
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeResponse {
    pub response: String,
}
