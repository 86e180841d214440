//! Error types for caption generation

use thiserror::Error;

use crate::completion::CompletionError;

/// Validation errors for generation requests
///
/// Both conditions are rejected before any network call is attempted.
#[derive(Error, Debug)]
pub enum GenerationValidationError {
	#[error("No target platforms were requested")]
	EmptyPlatforms,

	#[error("Description must not be empty")]
	EmptyDescription,
}

/// Errors crossing the orchestrator boundary
///
/// Per-platform completion failures inside a batch are captured as data in
/// the result set and never surface through this type; only the
/// preconditions and single-call paths do.
#[derive(Error, Debug)]
pub enum GenerationError {
	#[error("Generation validation failed: {0}")]
	Validation(#[from] GenerationValidationError),

	#[error("Completion request failed: {0}")]
	Completion(#[from] CompletionError),
}

impl GenerationError {
	/// HTTP status of the underlying completion failure, if any
	pub fn upstream_status(&self) -> Option<u16> {
		match self {
			GenerationError::Completion(err) => err.status_code(),
			GenerationError::Validation(_) => None,
		}
	}
}
