//! Progress event contract for streaming per-platform lifecycle updates
//!
//! One event is emitted per lifecycle transition while a batch runs, so
//! observers can render live status without waiting for the final result.

use serde::{Deserialize, Serialize};

use crate::captions::PlatformStatus;

/// One lifecycle transition for a platform within a generation batch
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProgressEvent {
	pub platform: String,
	pub status: PlatformStatus,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub text: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub error_message: Option<String>,
}

impl ProgressEvent {
	/// Completion call dispatched for the platform
	pub fn started(platform: impl Into<String>) -> Self {
		Self {
			platform: platform.into(),
			status: PlatformStatus::Started,
			text: None,
			error_message: None,
		}
	}

	/// Caption text available for the platform
	pub fn completed(platform: impl Into<String>, text: impl Into<String>) -> Self {
		Self {
			platform: platform.into(),
			status: PlatformStatus::Completed,
			text: Some(text.into()),
			error_message: None,
		}
	}

	/// Completion call failed for the platform
	pub fn error(platform: impl Into<String>, message: impl Into<String>) -> Self {
		Self {
			platform: platform.into(),
			status: PlatformStatus::Error,
			text: None,
			error_message: Some(message.into()),
		}
	}

	/// Whether this event ends the platform's lifecycle
	pub fn is_terminal(&self) -> bool {
		self.status.is_terminal()
	}
}
