//! Configuration settings structures

use serde::{Deserialize, Serialize};

use crate::configurable_value::{ConfigurableValue, ConfigurableValueError};
use traption_types::SecretString;

/// Main application settings
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Settings {
	pub server: ServerSettings,
	pub completion: CompletionSettings,
	pub timeouts: TimeoutSettings,
	pub logging: LoggingSettings,
}

/// Server configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServerSettings {
	pub host: String,
	pub port: u16,
}

/// Chat-completion upstream configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CompletionSettings {
	/// Base URL of the chat-completion API
	pub api_url: String,
	/// Model identifier sent with every request
	pub model: String,
	/// Bearer credential for the completion API
	///
	/// Never exposed to clients. Example configurations:
	/// - Environment variable: `{"type": "env", "value": "OPENAI_API_KEY"}`
	/// - Plain value: `{"type": "plain", "value": "sk-..."}`
	pub api_key: ConfigurableValue,
}

/// Timeout configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TimeoutSettings {
	/// Request timeout for the completion HTTP client
	pub request_ms: u64,
}

/// Logging configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LoggingSettings {
	pub level: String,
	pub format: LogFormat,
	pub structured: bool,
}

/// Log format options
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
	Json,
	Pretty,
	Compact,
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			server: ServerSettings {
				host: "0.0.0.0".to_string(),
				port: 3000,
			},
			completion: CompletionSettings {
				api_url: "https://api.openai.com/v1".to_string(),
				model: "gpt-4o-mini".to_string(),
				api_key: ConfigurableValue::from_env("OPENAI_API_KEY"),
			},
			timeouts: TimeoutSettings { request_ms: 30_000 },
			logging: LoggingSettings {
				level: "info".to_string(),
				format: LogFormat::Pretty,
				structured: false,
			},
		}
	}
}

impl Settings {
	/// Get server bind address
	pub fn bind_address(&self) -> String {
		format!("{}:{}", self.server.host, self.server.port)
	}

	/// Resolve the completion credential for secure handling
	pub fn completion_api_key(&self) -> Result<SecretString, ConfigurableValueError> {
		self.completion.api_key.resolve_for_secret()
	}
}
