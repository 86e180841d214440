//! Fan-out caption generation orchestration

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::progress::ProgressChannel;
use crate::prompt::build_prompts;
use traption_types::{
	CaptionOutput, CompletionProvider, CompletionRequest, GenerationError, GenerationRequest,
	GenerationResult, GenerationValidationError, PlatformResult, PlatformStatus, ProgressEvent,
};

/// Service driving one completion call per requested platform
///
/// Platforms are processed sequentially in the order supplied, with one
/// completion call outstanding at a time. A failure on one platform is
/// recorded in that platform's result slot and never aborts the batch.
pub struct GeneratorService {
	provider: Arc<dyn CompletionProvider>,
}

impl GeneratorService {
	pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
		Self { provider }
	}

	/// Identifier of the configured provider, for startup logs
	pub fn provider_name(&self) -> &str {
		self.provider.name()
	}

	/// Generate captions and shape the output by platform count
	///
	/// Returns `CaptionOutput::Single` when the request names exactly one
	/// distinct platform and `CaptionOutput::Batch` otherwise. Only the
	/// request preconditions error; per-platform failures appear as
	/// `"Error: ..."` entries in the output.
	pub async fn generate(
		&self,
		request: &GenerationRequest,
		progress: &ProgressChannel,
	) -> GenerationResult<CaptionOutput> {
		request.validate()?;
		let platforms = request.unique_platforms();
		let mut results = self.run_batch(request, &platforms, progress).await;

		if results.len() == 1 {
			// Validation guarantees at least one platform, so pop cannot
			// come up empty; the fallback keeps this total.
			return Ok(match results.pop() {
				Some(result) => CaptionOutput::Single(result.into_output_string()),
				None => CaptionOutput::Batch(HashMap::new()),
			});
		}

		Ok(CaptionOutput::Batch(
			results
				.into_iter()
				.map(|result| {
					let platform = result.platform.clone();
					(platform, result.into_output_string())
				})
				.collect(),
		))
	}

	/// Generate captions and return the full per-platform result set
	///
	/// The key set equals the requested (deduplicated) platform set and
	/// every entry is terminal. The multi-platform HTTP path uses this to
	/// respond with a map regardless of platform count.
	pub async fn generate_set(
		&self,
		request: &GenerationRequest,
		progress: &ProgressChannel,
	) -> GenerationResult<HashMap<String, PlatformResult>> {
		request.validate()?;
		let platforms = request.unique_platforms();
		let results = self.run_batch(request, &platforms, progress).await;

		Ok(results
			.into_iter()
			.map(|result| (result.platform.clone(), result))
			.collect())
	}

	/// Generate one caption for a single-platform request, propagating the
	/// completion failure typed
	///
	/// The single-platform HTTP path uses this to mirror the upstream
	/// status code instead of flattening the failure into a string.
	pub async fn generate_single(&self, request: &GenerationRequest) -> GenerationResult<String> {
		request.validate()?;
		let platforms = request.unique_platforms();
		let platform = platforms.first().ok_or(GenerationError::Validation(
			GenerationValidationError::EmptyPlatforms,
		))?;

		let prompts = build_prompts(request, platform);
		let completion_request = CompletionRequest::new(platform.clone(), prompts);
		let text = self.provider.complete(&completion_request).await?;
		Ok(text)
	}

	async fn run_batch(
		&self,
		request: &GenerationRequest,
		platforms: &[String],
		progress: &ProgressChannel,
	) -> Vec<PlatformResult> {
		info!(
			"Generating captions for {} platform(s) via {}",
			platforms.len(),
			self.provider.name()
		);

		let mut results: Vec<PlatformResult> = Vec::with_capacity(platforms.len());
		for platform in platforms {
			results.push(self.generate_for_platform(request, platform, progress).await);
		}

		let failed = results
			.iter()
			.filter(|r| r.status == PlatformStatus::Error)
			.count();
		info!(
			"Caption generation completed: {} succeeded, {} failed",
			results.len() - failed,
			failed
		);

		results
	}

	async fn generate_for_platform(
		&self,
		request: &GenerationRequest,
		platform: &str,
		progress: &ProgressChannel,
	) -> PlatformResult {
		let mut result = PlatformResult::new(platform);
		result.mark_started();
		progress.emit(ProgressEvent::started(platform));

		debug!("Starting caption generation for platform {}", platform);
		let prompts = build_prompts(request, platform);
		let completion_request = CompletionRequest::new(platform, prompts);

		match self.provider.complete(&completion_request).await {
			Ok(text) => {
				debug!(
					"Caption generated for platform {} ({} chars)",
					platform,
					text.len()
				);
				progress.emit(ProgressEvent::completed(platform, text.clone()));
				result.complete(text);
			},
			Err(e) => {
				warn!("Caption generation failed for platform {}: {}", platform, e);
				let message = e.to_string();
				progress.emit(ProgressEvent::error(platform, message.clone()));
				result.fail(message);
			},
		}

		result
	}
}
