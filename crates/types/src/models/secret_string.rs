//! Secure handling of the completion API credential

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Holder for sensitive values like the completion API key
///
/// The wrapped string is cleared from memory on drop, and every printable
/// surface (Debug, Display, serde) redacts it so a credential cannot leak
/// into logs or response bodies by accident.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretString {
	inner: String,
}

impl SecretString {
	pub fn new(secret: String) -> Self {
		Self { inner: secret }
	}

	/// Access the wrapped value; call sites should be few and deliberate
	pub fn expose_secret(&self) -> &str {
		&self.inner
	}

	pub fn is_empty(&self) -> bool {
		self.inner.is_empty()
	}
}

impl From<String> for SecretString {
	fn from(secret: String) -> Self {
		Self::new(secret)
	}
}

impl From<&str> for SecretString {
	fn from(secret: &str) -> Self {
		Self::new(secret.to_string())
	}
}

impl fmt::Debug for SecretString {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("SecretString")
			.field("inner", &"[REDACTED]")
			.finish()
	}
}

impl fmt::Display for SecretString {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "[REDACTED]")
	}
}

impl Serialize for SecretString {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.serialize_str("[REDACTED]")
	}
}

impl<'de> Deserialize<'de> for SecretString {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		let secret = String::deserialize(deserializer)?;
		Ok(SecretString::new(secret))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_expose_and_emptiness() {
		let secret = SecretString::from("sk-test-123");
		assert_eq!(secret.expose_secret(), "sk-test-123");
		assert!(!secret.is_empty());
		assert!(SecretString::from("").is_empty());
	}

	#[test]
	fn test_debug_and_display_redact() {
		let secret = SecretString::from("sk-test-123");
		assert!(format!("{:?}", secret).contains("[REDACTED]"));
		assert!(!format!("{:?}", secret).contains("sk-test-123"));
		assert_eq!(format!("{}", secret), "[REDACTED]");
	}

	#[test]
	fn test_serialization_redacts() {
		let secret = SecretString::from("sk-test-123");
		let json = serde_json::to_string(&secret).unwrap();
		assert_eq!(json, "\"[REDACTED]\"");
	}

	#[test]
	fn test_deserialization_keeps_value() {
		let secret: SecretString = serde_json::from_str("\"sk-from-config\"").unwrap();
		assert_eq!(secret.expose_secret(), "sk-from-config");
	}
}
