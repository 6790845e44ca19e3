use crate::error::LlmError;
use crate::settings::GenerationSettings;
use crate::traits::TextGenerator;
use reqwest::Client;
use serde::{Deserialize, Serialize};

type Result<T> = std::result::Result<T, LlmError>;

#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    fn new(role: &str, content: &str) -> Self {
        Self {
            role: role.to_string(),
            content: content.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

impl ChatCompletionResponse {
    /// Content of the first choice, unchanged.
    pub fn into_text(self) -> Result<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(LlmError::EmptyResponse)
    }
}

/// Client for OpenAI-compatible chat completion APIs
pub struct ChatClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
    settings: GenerationSettings,
}

impl ChatClient {
    /// Create a new chat client with the default generation settings
    ///
    /// # Arguments
    /// * `base_url` - API root including the version segment (e.g., "https://api.openai.com/v1")
    /// * `api_key` - Bearer token for the provider
    /// * `model` - Model name (e.g., "gpt-4o-mini")
    pub fn new(base_url: String, api_key: String, model: String) -> Result<Self> {
        Self::with_settings(base_url, api_key, model, GenerationSettings::default())
    }

    pub fn with_settings(
        base_url: String,
        api_key: String,
        model: String,
        settings: GenerationSettings,
    ) -> Result<Self> {
        let client = Client::builder().timeout(settings.timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            model,
            settings,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Request body for a prompt: the fixed persona as the system message
    /// followed by the prompt as the only user message.
    pub fn build_request(&self, prompt: &str) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage::new("system", &self.settings.system_prompt),
                ChatMessage::new("user", prompt),
            ],
            temperature: self.settings.temperature,
            max_tokens: self.settings.max_tokens,
        }
    }

    async fn complete(&self, prompt: &str) -> Result<String> {
        let request = self.build_request(prompt);

        tracing::info!(
            "Sending request to LLM (model: {}, prompt length: {} chars)",
            self.model,
            prompt.len()
        );

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::ApiError {
                status: status.as_u16(),
                body,
            });
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| LlmError::ParseError(e.to_string()))?;

        if let Some(usage) = &completion.usage {
            tracing::info!(
                "LLM usage: {} prompt tokens, {} completion tokens",
                usage.prompt_tokens,
                usage.completion_tokens
            );
        }

        let text = completion.into_text()?;
        tracing::info!("LLM generation complete: {} chars output", text.len());

        Ok(text)
    }
}

#[async_trait::async_trait]
impl TextGenerator for ChatClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.complete(prompt).await
    }
}
