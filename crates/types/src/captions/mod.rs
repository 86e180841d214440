//! Core caption domain model and business logic

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub mod errors;
pub mod request;
pub mod response;

pub use errors::{GenerationError, GenerationValidationError};
pub use request::{
	BatchCaptionApiRequest, CaptionApiRequest, CaptionLength, GenerationRequest, Style, Tone,
};
pub use response::CaptionResponse;

/// Result type for generation operations
pub type GenerationResult<T> = Result<T, GenerationError>;

/// Prefix marking a failed platform entry in a caller-visible result set
pub const ERROR_PREFIX: &str = "Error: ";

/// Lifecycle status of caption generation for one platform
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PlatformStatus {
	/// Not yet picked up by the orchestrator
	Pending,
	/// Completion call in flight
	Started,
	/// Caption text available
	Completed,
	/// Completion call failed
	Error,
}

impl PlatformStatus {
	/// Terminal states are final; no transition leaves them
	pub fn is_terminal(&self) -> bool {
		matches!(self, PlatformStatus::Completed | PlatformStatus::Error)
	}
}

/// Result of caption generation for a single platform
///
/// One instance exists per requested platform. The orchestrator owns it
/// for the duration of a batch and advances it through
/// `pending -> started -> completed | error`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlatformResult {
	pub platform: String,
	pub status: PlatformStatus,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub text: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub error_message: Option<String>,
}

impl PlatformResult {
	/// Create a pending result for the given platform
	pub fn new(platform: impl Into<String>) -> Self {
		Self {
			platform: platform.into(),
			status: PlatformStatus::Pending,
			text: None,
			error_message: None,
		}
	}

	/// Mark the completion call as in flight
	pub fn mark_started(&mut self) {
		if !self.status.is_terminal() {
			self.status = PlatformStatus::Started;
		}
	}

	/// Record a successful caption; ignored once terminal
	pub fn complete(&mut self, text: String) {
		if self.status.is_terminal() {
			return;
		}
		self.status = PlatformStatus::Completed;
		self.text = Some(text);
	}

	/// Record a failure; ignored once terminal
	pub fn fail(&mut self, message: String) {
		if self.status.is_terminal() {
			return;
		}
		self.status = PlatformStatus::Error;
		self.error_message = Some(message);
	}

	pub fn is_terminal(&self) -> bool {
		self.status.is_terminal()
	}

	/// Final text-or-error string for the caller-visible result set
	pub fn into_output_string(self) -> String {
		match self.status {
			PlatformStatus::Completed => self.text.unwrap_or_default(),
			_ => format!(
				"{}{}",
				ERROR_PREFIX,
				self.error_message
					.unwrap_or_else(|| "caption generation did not complete".to_string())
			),
		}
	}
}

/// Caller-visible output of one generation batch
///
/// The browser contract returns a bare string for single-platform requests
/// and an object keyed by platform for multi-platform requests. The tagged
/// variants make that distinction explicit for library callers while the
/// untagged serialization preserves the wire shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum CaptionOutput {
	/// Caption text, or an `"Error: ..."` string, for a one-platform request
	Single(String),
	/// Platform identifier mapped to caption text or an `"Error: ..."` string
	Batch(HashMap<String, String>),
}

impl CaptionOutput {
	pub fn is_single(&self) -> bool {
		matches!(self, CaptionOutput::Single(_))
	}

	pub fn as_single(&self) -> Option<&str> {
		match self {
			CaptionOutput::Single(text) => Some(text),
			CaptionOutput::Batch(_) => None,
		}
	}

	pub fn as_batch(&self) -> Option<&HashMap<String, String>> {
		match self {
			CaptionOutput::Single(_) => None,
			CaptionOutput::Batch(map) => Some(map),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_platform_result_lifecycle() {
		let mut result = PlatformResult::new("instagram");
		assert_eq!(result.status, PlatformStatus::Pending);
		assert!(!result.is_terminal());

		result.mark_started();
		assert_eq!(result.status, PlatformStatus::Started);

		result.complete("A caption".to_string());
		assert_eq!(result.status, PlatformStatus::Completed);
		assert_eq!(result.text.as_deref(), Some("A caption"));
		assert!(result.is_terminal());
	}

	#[test]
	fn test_terminal_states_are_final() {
		let mut completed = PlatformResult::new("instagram");
		completed.complete("Caption".to_string());
		completed.fail("late failure".to_string());
		assert_eq!(completed.status, PlatformStatus::Completed);
		assert!(completed.error_message.is_none());

		let mut failed = PlatformResult::new("linkedin");
		failed.fail("boom".to_string());
		failed.complete("late caption".to_string());
		assert_eq!(failed.status, PlatformStatus::Error);
		assert!(failed.text.is_none());
	}

	#[test]
	fn test_output_string_carries_error_prefix() {
		let mut failed = PlatformResult::new("linkedin");
		failed.fail("upstream returned 500".to_string());
		assert_eq!(
			failed.into_output_string(),
			"Error: upstream returned 500"
		);

		let mut ok = PlatformResult::new("instagram");
		ok.complete("Great caption!".to_string());
		assert_eq!(ok.into_output_string(), "Great caption!");
	}

	#[test]
	fn test_single_output_serializes_as_bare_string() {
		let output = CaptionOutput::Single("Great caption!".to_string());
		let json = serde_json::to_string(&output).unwrap();
		assert_eq!(json, "\"Great caption!\"");
	}

	#[test]
	fn test_batch_output_serializes_as_plain_map() {
		let mut map = HashMap::new();
		map.insert("instagram".to_string(), "Great caption!".to_string());
		map.insert("linkedin".to_string(), "Error: boom".to_string());
		let output = CaptionOutput::Batch(map);

		let value = serde_json::to_value(&output).unwrap();
		assert_eq!(value["instagram"], "Great caption!");
		assert_eq!(value["linkedin"], "Error: boom");
	}
}
