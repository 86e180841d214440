//! Prompt construction for caption generation
//!
//! Pure templating over the request fields. Identical inputs yield
//! byte-identical prompts; there is no randomness and no I/O here.

use traption_types::{GenerationRequest, PromptPair};

/// Fallback when the request names no audience
const DEFAULT_AUDIENCE: &str = "General audience";

/// Fallback when the request names no call to action
const DEFAULT_CTA: &str = "None specified";

const SYSTEM_PROMPT: &str = "You are an expert social media copywriter. \
	Write captions tailored to the target platform, matching the requested \
	tone, style and length exactly. Return only the caption text with no \
	explanation or preamble.";

/// Build the system+user prompt pair for one target platform
///
/// Callers validate the description upstream; this function interpolates
/// whatever it is given.
pub fn build_prompts(request: &GenerationRequest, platform: &str) -> PromptPair {
	let audience = request
		.audience
		.as_deref()
		.filter(|a| !a.trim().is_empty())
		.unwrap_or(DEFAULT_AUDIENCE);

	let cta = request
		.call_to_action
		.as_deref()
		.filter(|c| !c.trim().is_empty())
		.unwrap_or(DEFAULT_CTA);

	let keywords = if request.keywords.is_empty() {
		"none".to_string()
	} else {
		request.keywords.join(", ")
	};

	let emoji_directive = if request.include_emojis {
		"Include a few fitting emojis."
	} else {
		"Do not use emojis."
	};

	let hashtag_directive = if request.include_hashtags {
		"Include relevant hashtags."
	} else {
		"Do not include hashtags."
	};

	let user = format!(
		"Write a {length} {tone} social media caption for {platform} in a {style} style.\n\
		Post description: {description}\n\
		Target audience: {audience}\n\
		Language: {language}\n\
		Keywords to weave in naturally, without forcing them: {keywords}\n\
		End the caption with this call to action: {cta}\n\
		{emoji_directive}\n\
		{hashtag_directive}",
		length = request.length.hint(),
		tone = request.tone,
		platform = platform,
		style = request.style,
		description = request.description,
		audience = audience,
		language = request.language,
		keywords = keywords,
		cta = cta,
		emoji_directive = emoji_directive,
		hashtag_directive = hashtag_directive,
	);

	PromptPair {
		system: SYSTEM_PROMPT.to_string(),
		user,
	}
}
