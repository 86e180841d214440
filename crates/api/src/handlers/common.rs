use serde::Serialize;

/// Error body shared by the caption endpoints
///
/// The browser contract is a single `error` field; richer envelopes would
/// break existing clients.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
	pub error: String,
}

impl ErrorResponse {
	pub fn new(error: impl Into<String>) -> Self {
		Self {
			error: error.into(),
		}
	}
}
