//! End-to-end tests for the fan-out orchestrator

use std::sync::Arc;

use traption::mocks::{
	sample_generation_request, MockCompletionProvider, ScriptedCompletionProvider,
};
use traption::{
	CaptionOutput, GenerationError, GenerationValidationError, GeneratorService, PlatformStatus,
	ProgressChannel, ProgressEvent,
};

fn generator_with_mock(reply: &str) -> (GeneratorService, Arc<MockCompletionProvider>) {
	let provider = Arc::new(MockCompletionProvider::new(reply));
	(GeneratorService::new(provider.clone()), provider)
}

#[tokio::test]
async fn test_result_keys_match_requested_platforms() {
	let (generator, _) = generator_with_mock("Great caption!");
	let request = sample_generation_request(&["instagram", "linkedin", "twitter"]);

	let results = generator
		.generate_set(&request, &ProgressChannel::new())
		.await
		.unwrap();

	let mut keys: Vec<_> = results.keys().cloned().collect();
	keys.sort();
	assert_eq!(keys, vec!["instagram", "linkedin", "twitter"]);
	assert!(results.values().all(|r| r.is_terminal()));
}

#[tokio::test]
async fn test_single_platform_returns_bare_string() {
	let (generator, _) = generator_with_mock("Great caption!");
	let request = sample_generation_request(&["instagram"]);

	let output = generator
		.generate(&request, &ProgressChannel::new())
		.await
		.unwrap();

	assert_eq!(output, CaptionOutput::Single("Great caption!".to_string()));
}

#[tokio::test]
async fn test_multi_platform_returns_batch_map() {
	let (generator, _) = generator_with_mock("Great caption!");
	let request = sample_generation_request(&["instagram", "linkedin"]);

	let output = generator
		.generate(&request, &ProgressChannel::new())
		.await
		.unwrap();

	let batch = output.as_batch().unwrap();
	assert_eq!(batch.len(), 2);
	assert_eq!(batch["instagram"], "Great caption!");
	assert_eq!(batch["linkedin"], "Great caption!");
}

#[tokio::test]
async fn test_duplicate_platforms_collapse_to_one_call() {
	let (generator, provider) = generator_with_mock("Great caption!");
	let request = sample_generation_request(&["instagram", "instagram"]);

	let output = generator
		.generate(&request, &ProgressChannel::new())
		.await
		.unwrap();

	assert!(output.is_single());
	assert_eq!(provider.call_count(), 1);
}

#[tokio::test]
async fn test_failure_is_isolated_per_platform() {
	let provider = ScriptedCompletionProvider::new("Great caption!").fail_with("linkedin", 500);
	let generator = GeneratorService::new(Arc::new(provider));
	let request = sample_generation_request(&["instagram", "linkedin"]);

	let output = generator
		.generate(&request, &ProgressChannel::new())
		.await
		.unwrap();

	let batch = output.as_batch().unwrap();
	assert_eq!(batch["instagram"], "Great caption!");
	assert!(batch["linkedin"].starts_with("Error: "));
	assert!(batch["linkedin"].contains("500"));
}

#[tokio::test]
async fn test_empty_platforms_fail_before_any_call() {
	let (generator, provider) = generator_with_mock("Great caption!");
	let request = sample_generation_request(&[]);

	let error = generator
		.generate(&request, &ProgressChannel::new())
		.await
		.unwrap_err();

	assert!(matches!(
		error,
		GenerationError::Validation(GenerationValidationError::EmptyPlatforms)
	));
	assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn test_empty_description_fails_before_any_call() {
	let (generator, provider) = generator_with_mock("Great caption!");
	let mut request = sample_generation_request(&["instagram"]);
	request.description = "  ".to_string();

	let error = generator
		.generate(&request, &ProgressChannel::new())
		.await
		.unwrap_err();

	assert!(matches!(
		error,
		GenerationError::Validation(GenerationValidationError::EmptyDescription)
	));
	assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn test_progress_events_fire_in_lifecycle_order() {
	let provider = ScriptedCompletionProvider::new("Great caption!").fail_with("linkedin", 500);
	let generator = GeneratorService::new(Arc::new(provider));
	let request = sample_generation_request(&["instagram", "linkedin"]);

	let progress = ProgressChannel::new();
	let mut receiver = progress.subscribe();

	generator.generate(&request, &progress).await.unwrap();

	let mut events: Vec<ProgressEvent> = Vec::new();
	while let Ok(event) = receiver.try_recv() {
		events.push(event);
	}

	for platform in ["instagram", "linkedin"] {
		let platform_events: Vec<_> =
			events.iter().filter(|e| e.platform == platform).collect();

		// started first, then exactly one terminal event
		assert_eq!(platform_events[0].status, PlatformStatus::Started);
		let terminal: Vec<_> = platform_events
			.iter()
			.filter(|e| e.is_terminal())
			.collect();
		assert_eq!(terminal.len(), 1);
	}

	let completed = events
		.iter()
		.find(|e| e.platform == "instagram" && e.is_terminal())
		.unwrap();
	assert_eq!(completed.status, PlatformStatus::Completed);
	assert_eq!(completed.text.as_deref(), Some("Great caption!"));

	let failed = events
		.iter()
		.find(|e| e.platform == "linkedin" && e.is_terminal())
		.unwrap();
	assert_eq!(failed.status, PlatformStatus::Error);
	assert!(failed.error_message.as_deref().unwrap().contains("500"));
}

#[tokio::test]
async fn test_generate_single_propagates_typed_error() {
	let provider = ScriptedCompletionProvider::new("unused").fail_with("instagram", 503);
	let generator = GeneratorService::new(Arc::new(provider));
	let request = sample_generation_request(&["instagram"]);

	let error = generator.generate_single(&request).await.unwrap_err();
	assert_eq!(error.upstream_status(), Some(503));
}

#[tokio::test]
async fn test_single_platform_failure_becomes_error_string() {
	let provider = ScriptedCompletionProvider::new("unused").fail_with("instagram", 500);
	let generator = GeneratorService::new(Arc::new(provider));
	let request = sample_generation_request(&["instagram"]);

	let output = generator
		.generate(&request, &ProgressChannel::new())
		.await
		.unwrap();

	let text = output.as_single().unwrap();
	assert!(text.starts_with("Error: "));
}
