//! Error types for completion provider operations

use thiserror::Error;

/// Result type for completion provider operations
pub type CompletionResult<T> = Result<T, CompletionError>;

/// Completion provider operation errors
#[derive(Error, Debug)]
pub enum CompletionError {
	/// The server-side credential is missing or unresolvable
	#[error("Completion credential is not configured: {reason}")]
	Configuration { reason: String },

	#[error("HTTP request failed: {0}")]
	Http(#[from] reqwest::Error),

	#[error("HTTP {status_code}: {reason}")]
	HttpStatus { status_code: u16, reason: String },

	#[error("Invalid response format: {reason}")]
	InvalidResponse { reason: String },
}

impl CompletionError {
	/// Extract the upstream HTTP status code from the error if available
	pub fn status_code(&self) -> Option<u16> {
		match self {
			CompletionError::HttpStatus { status_code, .. } => Some(*status_code),
			CompletionError::Http(reqwest_error) => {
				reqwest_error.status().map(|status| status.as_u16())
			},
			_ => None,
		}
	}

	/// Create an HTTP failure error with the given status code and reason
	pub fn http_failure(status_code: u16, reason: impl Into<String>) -> Self {
		Self::HttpStatus {
			status_code,
			reason: reason.into(),
		}
	}

	/// Create a configuration error with the given reason
	pub fn configuration(reason: impl Into<String>) -> Self {
		Self::Configuration {
			reason: reason.into(),
		}
	}

	/// Whether this failure stems from missing server-side configuration
	pub fn is_configuration(&self) -> bool {
		matches!(self, CompletionError::Configuration { .. })
	}
}
