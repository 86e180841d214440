//! Completion provider seam and prompt types
//!
//! `CompletionProvider` is the trait boundary between the orchestration
//! layer and the external chat-completion service; the HTTP implementation
//! lives in the `traption-completion` crate and tests substitute mocks.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub mod errors;

pub use errors::{CompletionError, CompletionResult};

/// System and user prompt pair fed to the chat-completion API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PromptPair {
	pub system: String,
	pub user: String,
}

/// One completion exchange
///
/// The platform identifier rides along for logging and mock routing; the
/// upstream request itself only carries the prompts.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
	pub platform: String,
	pub prompts: PromptPair,
}

impl CompletionRequest {
	pub fn new(platform: impl Into<String>, prompts: PromptPair) -> Self {
		Self {
			platform: platform.into(),
			prompts,
		}
	}
}

/// Adapter seam for the external chat-completion service
#[async_trait]
pub trait CompletionProvider: Send + Sync {
	/// Identifier used in logs
	fn name(&self) -> &str;

	/// Perform one request/response exchange and return the caption text
	///
	/// A failed call is final; no retries happen at this seam.
	async fn complete(&self, request: &CompletionRequest) -> CompletionResult<String>;
}
