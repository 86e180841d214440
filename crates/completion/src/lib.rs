//! Traption Completion
//!
//! HTTP client for the external chat-completion service.

pub mod openai;

pub use openai::OpenAiClient;
pub use traption_types::{CompletionError, CompletionProvider, CompletionRequest, CompletionResult};
