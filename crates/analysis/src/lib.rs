pub mod dto;
pub mod error;
pub mod models;
pub mod services;

pub use error::{AnalysisError, Result};
pub use models::{Intent, NormalizedRound, RawRound, Timestamp};
pub use services::prompt_builder::PromptBuilder;
