//! Wire response models for the caption endpoints

use serde::{Deserialize, Serialize};

/// Success body of the single-platform endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptionResponse {
	pub caption: String,
}

impl CaptionResponse {
	pub fn new(caption: impl Into<String>) -> Self {
		Self {
			caption: caption.into(),
		}
	}
}
