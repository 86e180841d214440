//! Traption Types
//!
//! Shared models and traits for the Traption caption generation service.
//! This crate contains all domain models organized by business entity.

pub mod captions;
pub mod completion;
pub mod models;
pub mod progress;

// Re-export serde_json for convenience
pub use serde_json;

// Re-export commonly used types for convenience
pub use captions::{
	BatchCaptionApiRequest, CaptionApiRequest, CaptionLength, CaptionOutput, CaptionResponse,
	GenerationError, GenerationRequest, GenerationResult, GenerationValidationError,
	PlatformResult, PlatformStatus, Style, Tone, ERROR_PREFIX,
};

pub use completion::{
	CompletionError, CompletionProvider, CompletionRequest, CompletionResult, PromptPair,
};

pub use models::SecretString;

pub use progress::ProgressEvent;
