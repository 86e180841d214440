//! Mock completion providers for examples and testing
//!
//! These stand in for the external chat-completion service so tests and
//! examples never touch the network.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use traption_types::{
	CompletionError, CompletionProvider, CompletionRequest, CompletionResult, GenerationRequest,
};

/// Mock provider returning a fixed caption for every platform
pub struct MockCompletionProvider {
	reply: String,
	calls: AtomicUsize,
}

impl MockCompletionProvider {
	pub fn new(reply: impl Into<String>) -> Self {
		Self {
			reply: reply.into(),
			calls: AtomicUsize::new(0),
		}
	}

	/// Number of completion calls received so far
	pub fn call_count(&self) -> usize {
		self.calls.load(Ordering::SeqCst)
	}
}

#[async_trait]
impl CompletionProvider for MockCompletionProvider {
	fn name(&self) -> &str {
		"mock"
	}

	async fn complete(&self, _request: &CompletionRequest) -> CompletionResult<String> {
		self.calls.fetch_add(1, Ordering::SeqCst);
		Ok(self.reply.clone())
	}
}

/// Mock provider failing for selected platforms and succeeding otherwise
pub struct ScriptedCompletionProvider {
	reply: String,
	failures: HashMap<String, u16>,
}

impl ScriptedCompletionProvider {
	pub fn new(reply: impl Into<String>) -> Self {
		Self {
			reply: reply.into(),
			failures: HashMap::new(),
		}
	}

	/// Make completion calls for `platform` fail with the given status
	pub fn fail_with(mut self, platform: impl Into<String>, status_code: u16) -> Self {
		self.failures.insert(platform.into(), status_code);
		self
	}
}

#[async_trait]
impl CompletionProvider for ScriptedCompletionProvider {
	fn name(&self) -> &str {
		"scripted-mock"
	}

	async fn complete(&self, request: &CompletionRequest) -> CompletionResult<String> {
		match self.failures.get(&request.platform) {
			Some(status_code) => Err(CompletionError::http_failure(
				*status_code,
				format!("completion API returned status {}", status_code),
			)),
			None => Ok(self.reply.clone()),
		}
	}
}

/// A generation request with the fields tests care about filled in
pub fn sample_generation_request(platforms: &[&str]) -> GenerationRequest {
	GenerationRequest::new(
		platforms.iter().map(|p| p.to_string()).collect(),
		"launch day",
	)
}
