use reqwest::Client;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{TextGenConfigError, TextGenError};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
const SYSTEM_PROMPT: &str = "You are a helpful AI assistant for employees learning about AI. \
     Provide clear, practical, and professional responses.";
const TEMPERATURE: f32 = 0.7;
const MAX_TOKENS: u32 = 500;

/// Returned when the upstream answers successfully but with no choices.
pub const NO_RESPONSE_SENTINEL: &str = "No response generated";

/// Endpoint and model for the text-generation request.
///
/// The defaults are the fixed production contract; the base URL override
/// exists so tests can point the client at a local mock server.
#[derive(Clone, Debug)]
pub struct TextGenConfig {
    pub base_url: String,
    pub model: String,
}

impl Default for TextGenConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

impl TextGenConfig {
    /// Override the base URL, validating it parses as a URL.
    ///
    /// # Errors
    ///
    /// Returns `TextGenConfigError::InvalidBaseUrl` for an unparsable URL.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, TextGenConfigError> {
        if Url::parse(base_url).is_err() {
            return Err(TextGenConfigError::InvalidBaseUrl);
        }
        self.base_url = base_url.to_string();
        Ok(self)
    }
}

/// Thin wrapper around the chat-completions endpoint.
///
/// Carries no credential of its own; the caller passes one per request so
/// the credential cache stays a separate concern.
#[derive(Clone)]
pub struct TextGenClient {
    client: Client,
    config: TextGenConfig,
}

impl TextGenClient {
    #[must_use]
    pub fn new(config: TextGenConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Send one prompt and return the generated text.
    ///
    /// Both preconditions are checked before any request is built, so a
    /// missing credential or blank prompt never touches the network.
    ///
    /// # Errors
    ///
    /// `MissingCredential` / `EmptyPrompt` on precondition failure,
    /// `Upstream` for a non-success HTTP status, `Transport` for network
    /// failures, `MalformedResponse` when a success body does not decode.
    pub async fn run(&self, prompt: &str, credential: &str) -> Result<String, TextGenError> {
        if credential.trim().is_empty() {
            return Err(TextGenError::MissingCredential);
        }
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(TextGenError::EmptyPrompt);
        }

        let url = format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        );
        let payload = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: prompt.to_string(),
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let response = self
            .client
            .post(url)
            .bearer_auth(credential.trim())
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorResponse>(&body)
                .ok()
                .and_then(|parsed| parsed.error)
                .and_then(|detail| detail.message)
                .unwrap_or_else(|| format!("request failed with status {status}"));
            return Err(TextGenError::Upstream { message });
        }

        let parsed: ChatResponse = serde_json::from_str(&body)
            .map_err(|err| TextGenError::MalformedResponse(err.to_string()))?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_else(|| NO_RESPONSE_SENTINEL.to_string());

        Ok(content)
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessageBody,
}

#[derive(Debug, Deserialize)]
struct ChatMessageBody {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: Option<ErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: Option<String>,
}
