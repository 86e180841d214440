//! Configurable value types that can load from environment variables or plain values

use std::fmt;

use serde::{Deserialize, Serialize};

use traption_types::SecretString;

/// A configuration value loaded from an environment variable or given inline
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ConfigurableValue {
	/// "env" to read an environment variable, "plain" for a direct value
	#[serde(rename = "type")]
	pub value_type: ValueType,
	/// Environment variable name, or the value itself
	pub value: String,
}

/// Source of a configurable value
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
	Env,
	Plain,
}

impl ConfigurableValue {
	/// Reference an environment variable
	pub fn from_env(env_var_name: &str) -> Self {
		Self {
			value_type: ValueType::Env,
			value: env_var_name.to_string(),
		}
	}

	/// Use an inline value
	pub fn from_plain(plain_value: &str) -> Self {
		Self {
			value_type: ValueType::Plain,
			value: plain_value.to_string(),
		}
	}

	/// Resolve the actual value based on its source
	pub fn resolve(&self) -> Result<String, ConfigurableValueError> {
		match self.value_type {
			ValueType::Env => std::env::var(&self.value).map_err(|_| {
				ConfigurableValueError::EnvironmentVariableNotFound(self.value.clone())
			}),
			ValueType::Plain => Ok(self.value.clone()),
		}
	}

	/// Resolve into a zeroizing wrapper for secret material
	pub fn resolve_for_secret(&self) -> Result<SecretString, ConfigurableValueError> {
		Ok(SecretString::from(self.resolve()?))
	}

	/// Description of where this value comes from, for startup logs
	pub fn description(&self) -> String {
		match self.value_type {
			ValueType::Env => format!("environment variable '{}'", self.value),
			ValueType::Plain => "configured plain value".to_string(),
		}
	}
}

/// Errors that can occur when resolving configurable values
#[derive(Debug, thiserror::Error)]
pub enum ConfigurableValueError {
	#[error("Environment variable '{0}' not found")]
	EnvironmentVariableNotFound(String),
}

// Display never shows the value itself; plain values may be secrets
impl fmt::Display for ConfigurableValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.value_type {
			ValueType::Env => write!(f, "env:{}", self.value),
			ValueType::Plain => write!(f, "plain:[REDACTED]"),
		}
	}
}

impl From<&str> for ConfigurableValue {
	fn from(value: &str) -> Self {
		// "env:NAME" strings in config files reference environment variables
		if let Some(env_var) = value.strip_prefix("env:") {
			Self::from_env(env_var)
		} else {
			Self::from_plain(value)
		}
	}
}

impl From<String> for ConfigurableValue {
	fn from(value: String) -> Self {
		ConfigurableValue::from(value.as_str())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::env;

	#[test]
	fn test_plain_value() {
		let config = ConfigurableValue::from_plain("sk-test");
		assert_eq!(config.value_type, ValueType::Plain);
		assert_eq!(config.resolve().unwrap(), "sk-test");
	}

	#[test]
	fn test_env_value() {
		env::set_var("TRAPTION_TEST_KEY", "sk-from-env");

		let config = ConfigurableValue::from_env("TRAPTION_TEST_KEY");
		assert_eq!(config.value_type, ValueType::Env);
		assert_eq!(config.resolve().unwrap(), "sk-from-env");

		env::remove_var("TRAPTION_TEST_KEY");
	}

	#[test]
	fn test_env_value_not_found() {
		let config = ConfigurableValue::from_env("TRAPTION_TEST_MISSING_KEY");
		assert!(config.resolve().is_err());
	}

	#[test]
	fn test_from_string_conversion() {
		let plain = ConfigurableValue::from("sk-plain");
		assert_eq!(plain.value_type, ValueType::Plain);

		let env_ref = ConfigurableValue::from("env:OPENAI_API_KEY");
		assert_eq!(env_ref.value_type, ValueType::Env);
		assert_eq!(env_ref.value, "OPENAI_API_KEY");
	}

	#[test]
	fn test_secret_resolution() {
		let config = ConfigurableValue::from_plain("sk-secret");
		let secret = config.resolve_for_secret().unwrap();
		assert_eq!(secret.expose_secret(), "sk-secret");
	}

	#[test]
	fn test_display_redacts_plain_values() {
		let plain = ConfigurableValue::from_plain("sk-secret");
		assert_eq!(format!("{}", plain), "plain:[REDACTED]");

		let env_ref = ConfigurableValue::from_env("OPENAI_API_KEY");
		assert_eq!(format!("{}", env_ref), "env:OPENAI_API_KEY");
	}

	#[test]
	fn test_serde_round_trip() {
		let config = ConfigurableValue::from_env("OPENAI_API_KEY");
		let json = serde_json::to_string(&config).unwrap();
		assert!(json.contains("\"type\":\"env\""));

		let deserialized: ConfigurableValue = serde_json::from_str(&json).unwrap();
		assert_eq!(deserialized.value_type, ValueType::Env);
		assert_eq!(deserialized.value, "OPENAI_API_KEY");
	}
}
