use std::time::Duration;

pub const SYSTEM_PROMPT: &str = "You are a concise disc golf score analyst. Answer using only the rounds you are given, follow the requested output format exactly, and never invent scores, courses, or dates.";

/// Fixed generation parameters sent with every request.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationSettings {
    pub temperature: f32,
    pub max_tokens: u32,
    pub system_prompt: String,
    pub timeout: Duration,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            temperature: 0.2,
            max_tokens: 300,
            system_prompt: SYSTEM_PROMPT.to_string(),
            timeout: Duration::from_secs(60),
        }
    }
}
