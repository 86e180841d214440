//! Generation request models and validation

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::errors::GenerationValidationError;

/// Result type for request validation
pub type GenerationValidationResult<T> = Result<T, GenerationValidationError>;

/// Caption tone requested by the user
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
	Professional,
	Casual,
	Funny,
	Inspirational,
	Bold,
}

impl fmt::Display for Tone {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let label = match self {
			Tone::Professional => "professional",
			Tone::Casual => "casual",
			Tone::Funny => "funny",
			Tone::Inspirational => "inspirational",
			Tone::Bold => "bold",
		};
		write!(f, "{}", label)
	}
}

/// Caption writing style requested by the user
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Style {
	Informative,
	Storytelling,
	Promotional,
	Minimalist,
	Conversational,
}

impl fmt::Display for Style {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let label = match self {
			Style::Informative => "informative",
			Style::Storytelling => "storytelling",
			Style::Promotional => "promotional",
			Style::Minimalist => "minimalist",
			Style::Conversational => "conversational",
		};
		write!(f, "{}", label)
	}
}

/// Requested caption length
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CaptionLength {
	Short,
	Medium,
	Long,
}

impl CaptionLength {
	/// Human-readable hint interpolated into the prompt template
	pub fn hint(&self) -> &'static str {
		match self {
			CaptionLength::Short => "short (1-2 sentences)",
			CaptionLength::Medium => "medium-length (2-4 sentences)",
			CaptionLength::Long => "long (4 or more sentences)",
		}
	}
}

/// One user-initiated generation action
///
/// Created fresh per action and immutable once dispatched to the
/// orchestrator. Platform identifiers are free-form strings
/// (e.g. "instagram"); duplicates carry no meaning.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerationRequest {
	pub target_platforms: Vec<String>,
	pub tone: Tone,
	pub style: Style,
	pub language: String,
	pub description: String,
	pub audience: Option<String>,
	pub keywords: Vec<String>,
	pub call_to_action: Option<String>,
	pub include_emojis: bool,
	pub include_hashtags: bool,
	pub length: CaptionLength,
}

impl GenerationRequest {
	/// Create a request with the defaults the caption form starts from
	pub fn new(target_platforms: Vec<String>, description: impl Into<String>) -> Self {
		Self {
			target_platforms,
			tone: Tone::Casual,
			style: Style::Informative,
			language: "English".to_string(),
			description: description.into(),
			audience: None,
			keywords: Vec::new(),
			call_to_action: None,
			include_emojis: true,
			include_hashtags: true,
			length: CaptionLength::Medium,
		}
	}

	pub fn with_tone(mut self, tone: Tone) -> Self {
		self.tone = tone;
		self
	}

	pub fn with_style(mut self, style: Style) -> Self {
		self.style = style;
		self
	}

	pub fn with_language(mut self, language: impl Into<String>) -> Self {
		self.language = language.into();
		self
	}

	pub fn with_audience(mut self, audience: impl Into<String>) -> Self {
		self.audience = Some(audience.into());
		self
	}

	pub fn with_keywords(mut self, keywords: Vec<String>) -> Self {
		self.keywords = keywords;
		self
	}

	pub fn with_call_to_action(mut self, cta: impl Into<String>) -> Self {
		self.call_to_action = Some(cta.into());
		self
	}

	pub fn with_emojis(mut self, include: bool) -> Self {
		self.include_emojis = include;
		self
	}

	pub fn with_hashtags(mut self, include: bool) -> Self {
		self.include_hashtags = include;
		self
	}

	pub fn with_length(mut self, length: CaptionLength) -> Self {
		self.length = length;
		self
	}

	/// Validate the request preconditions
	///
	/// Both checks run before any network call is attempted.
	pub fn validate(&self) -> GenerationValidationResult<()> {
		if self.description.trim().is_empty() {
			return Err(GenerationValidationError::EmptyDescription);
		}
		if self.target_platforms.is_empty() {
			return Err(GenerationValidationError::EmptyPlatforms);
		}
		Ok(())
	}

	/// Requested platforms with duplicates removed, first occurrence order kept
	pub fn unique_platforms(&self) -> Vec<String> {
		let mut seen = HashSet::new();
		self.target_platforms
			.iter()
			.filter(|p| seen.insert(p.as_str()))
			.cloned()
			.collect()
	}
}

/// Wire request for the single-platform endpoint
///
/// Field names follow the browser contract, hence the camelCase renames.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionApiRequest {
	pub platform: String,
	pub tone: Tone,
	pub style: Style,
	#[serde(default)]
	pub include_emojis: bool,
	#[serde(default)]
	pub include_hashtags: bool,
	pub language: String,
	pub description: String,
	#[serde(default)]
	pub audience: Option<String>,
	#[serde(default)]
	pub keywords: Vec<String>,
	#[serde(default)]
	pub cta: Option<String>,
	pub caption_length: CaptionLength,
}

impl CaptionApiRequest {
	/// Convert into a single-platform domain request
	pub fn into_generation_request(self) -> GenerationRequest {
		GenerationRequest {
			target_platforms: vec![self.platform],
			tone: self.tone,
			style: self.style,
			language: self.language,
			description: self.description,
			audience: self.audience,
			keywords: self.keywords,
			call_to_action: self.cta,
			include_emojis: self.include_emojis,
			include_hashtags: self.include_hashtags,
			length: self.caption_length,
		}
	}
}

/// Wire request for the multi-platform endpoint
///
/// The body is the single-platform body plus a `platforms` array; the
/// flattened `platform` field is ignored in favor of `platforms`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchCaptionApiRequest {
	#[serde(default)]
	pub platforms: Vec<String>,
	#[serde(flatten)]
	pub base: CaptionApiRequest,
}

impl BatchCaptionApiRequest {
	/// Convert into a multi-platform domain request
	pub fn into_generation_request(self) -> GenerationRequest {
		let mut request = self.base.into_generation_request();
		request.target_platforms = self.platforms;
		request
	}
}
