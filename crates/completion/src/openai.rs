//! OpenAI-style chat-completion client
//!
//! One POST per caption. The prompt pair maps onto the standard
//! system+user message layout and the trimmed first choice is the caption.
//! A failed call is final; retries are out of scope.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use traption_config::{CompletionSettings, ConfigurableValue, TimeoutSettings};
use traption_types::{CompletionError, CompletionProvider, CompletionRequest, CompletionResult};

/// Sampling temperature sent with every request; not user-configurable
const TEMPERATURE: f32 = 0.8;

/// Upper bound on generated caption tokens; not user-configurable
const MAX_TOKENS: u32 = 300;

#[derive(Serialize)]
struct ChatCompletionBody<'a> {
	model: &'a str,
	messages: Vec<ChatMessage<'a>>,
	temperature: f32,
	max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
	role: &'a str,
	content: &'a str,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
	#[serde(default)]
	choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
	message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
	content: Option<String>,
}

/// Chat-completion client for OpenAI-compatible endpoints
pub struct OpenAiClient {
	client: reqwest::Client,
	api_url: String,
	model: String,
	api_key: ConfigurableValue,
}

impl OpenAiClient {
	/// Create a client from completion and timeout settings
	pub fn from_settings(
		completion: &CompletionSettings,
		timeouts: &TimeoutSettings,
	) -> CompletionResult<Self> {
		Self::new(
			completion.api_url.clone(),
			completion.model.clone(),
			completion.api_key.clone(),
			timeouts.request_ms,
		)
	}

	/// Create a client with an explicit endpoint, model and credential
	///
	/// The credential is resolved per call rather than here, so a missing
	/// key surfaces as a configuration error on the request that needs it
	/// instead of preventing startup.
	pub fn new(
		api_url: String,
		model: String,
		api_key: ConfigurableValue,
		request_timeout_ms: u64,
	) -> CompletionResult<Self> {
		let mut headers = HeaderMap::new();
		headers.insert("Content-Type", HeaderValue::from_static("application/json"));
		headers.insert("Accept", HeaderValue::from_static("application/json"));

		let client = reqwest::Client::builder()
			.default_headers(headers)
			.timeout(Duration::from_millis(request_timeout_ms))
			.build()
			.map_err(CompletionError::Http)?;

		Ok(Self {
			client,
			api_url,
			model,
			api_key,
		})
	}

	fn chat_completions_url(&self) -> String {
		format!("{}/chat/completions", self.api_url.trim_end_matches('/'))
	}
}

#[async_trait]
impl CompletionProvider for OpenAiClient {
	fn name(&self) -> &str {
		"openai"
	}

	async fn complete(&self, request: &CompletionRequest) -> CompletionResult<String> {
		let api_key = match self.api_key.resolve() {
			Ok(key) => key,
			Err(e) => {
				warn!("Completion credential unavailable: {}", e);
				return Err(CompletionError::configuration(e.to_string()));
			},
		};

		debug!(
			"Requesting caption for platform {} (model={})",
			request.platform, self.model
		);

		let body = ChatCompletionBody {
			model: &self.model,
			messages: vec![
				ChatMessage {
					role: "system",
					content: &request.prompts.system,
				},
				ChatMessage {
					role: "user",
					content: &request.prompts.user,
				},
			],
			temperature: TEMPERATURE,
			max_tokens: MAX_TOKENS,
		};

		let response = self
			.client
			.post(self.chat_completions_url())
			.bearer_auth(&api_key)
			.json(&body)
			.send()
			.await
			.map_err(CompletionError::Http)?;

		if !response.status().is_success() {
			let status_code = response.status().as_u16();
			let reason = response.text().await.unwrap_or_default();
			warn!(
				"Completion endpoint returned status {} for platform {}",
				status_code, request.platform
			);
			return Err(CompletionError::HttpStatus {
				status_code,
				reason,
			});
		}

		let body_text = response.text().await.map_err(CompletionError::Http)?;
		let parsed: ChatCompletionResponse =
			serde_json::from_str(&body_text).map_err(|e| CompletionError::InvalidResponse {
				reason: format!("Failed to parse completion response: {}", e),
			})?;

		let caption = parsed
			.choices
			.into_iter()
			.next()
			.and_then(|choice| choice.message.content)
			.ok_or_else(|| CompletionError::InvalidResponse {
				reason: "No choices returned from completion API".to_string(),
			})?;

		Ok(caption.trim().to_string())
	}
}
