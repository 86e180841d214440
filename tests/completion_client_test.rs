//! Completion client tests against a local mock upstream

use axum::{http::StatusCode, routing::post, Json, Router};
use serde_json::json;

use traption::{
	CompletionError, CompletionProvider, CompletionRequest, ConfigurableValue, OpenAiClient,
	PromptPair,
};

/// Bind a local upstream on an ephemeral port and return its base URL
async fn spawn_upstream(router: Router) -> String {
	let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
	let addr = listener.local_addr().unwrap();
	tokio::spawn(async move {
		axum::serve(listener, router).await.unwrap();
	});
	format!("http://{}", addr)
}

fn client_for(base_url: String) -> OpenAiClient {
	OpenAiClient::new(
		base_url,
		"gpt-4o-mini".to_string(),
		ConfigurableValue::from_plain("sk-test"),
		5_000,
	)
	.unwrap()
}

fn completion_request() -> CompletionRequest {
	CompletionRequest::new(
		"instagram",
		PromptPair {
			system: "You write captions.".to_string(),
			user: "Write one.".to_string(),
		},
	)
}

#[tokio::test]
async fn test_returns_trimmed_first_choice() {
	let router = Router::new().route(
		"/chat/completions",
		post(|| async {
			Json(json!({
				"choices": [
					{ "message": { "role": "assistant", "content": "  Great caption!  " } }
				]
			}))
		}),
	);
	let client = client_for(spawn_upstream(router).await);

	let caption = client.complete(&completion_request()).await.unwrap();
	assert_eq!(caption, "Great caption!");
}

#[tokio::test]
async fn test_non_success_status_carries_upstream_payload() {
	let router = Router::new().route(
		"/chat/completions",
		post(|| async {
			(
				StatusCode::INTERNAL_SERVER_ERROR,
				Json(json!({ "error": "model overloaded" })),
			)
		}),
	);
	let client = client_for(spawn_upstream(router).await);

	let error = client.complete(&completion_request()).await.unwrap_err();
	assert_eq!(error.status_code(), Some(500));
	assert!(error.to_string().contains("model overloaded"));
}

#[tokio::test]
async fn test_missing_choices_is_invalid_response() {
	let router = Router::new().route(
		"/chat/completions",
		post(|| async { Json(json!({ "id": "cmpl-1", "choices": [] })) }),
	);
	let client = client_for(spawn_upstream(router).await);

	let error = client.complete(&completion_request()).await.unwrap_err();
	assert!(matches!(error, CompletionError::InvalidResponse { .. }));
	assert_eq!(error.status_code(), None);
}

#[tokio::test]
async fn test_missing_credential_fails_without_a_request() {
	// The endpoint is never contacted; credential resolution fails first
	let client = OpenAiClient::new(
		"http://127.0.0.1:9".to_string(),
		"gpt-4o-mini".to_string(),
		ConfigurableValue::from_env("TRAPTION_CLIENT_TEST_MISSING_KEY"),
		1_000,
	)
	.unwrap();

	let error = client.complete(&completion_request()).await.unwrap_err();
	assert!(error.is_configuration());
}
