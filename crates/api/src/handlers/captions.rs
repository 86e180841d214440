use std::collections::HashMap;

use axum::{extract::State, http::StatusCode, response::Json};
use tracing::info;

use crate::handlers::common::ErrorResponse;
use crate::state::AppState;
use traption_service::ProgressChannel;
use traption_types::{
	BatchCaptionApiRequest, CaptionApiRequest, CaptionResponse, CompletionError, GenerationError,
};

type HandlerError = (StatusCode, Json<ErrorResponse>);

/// POST /v1/caption - generate a caption for one platform
///
/// Upstream failures are reported with the upstream status code but a
/// generic message; this path never relays the raw completion API payload
/// to the browser.
pub async fn post_caption(
	State(state): State<AppState>,
	Json(request): Json<CaptionApiRequest>,
) -> Result<Json<CaptionResponse>, HandlerError> {
	info!("Received caption request for platform {}", request.platform);

	let request = request.into_generation_request();
	match state.generator.generate_single(&request).await {
		Ok(caption) => Ok(Json(CaptionResponse::new(caption))),
		Err(e) => Err(map_generation_error(e)),
	}
}

/// POST /v1/captions - generate captions for several platforms
///
/// Always responds 200 with a platform-keyed object once the request
/// passes validation; failed platforms carry an `"Error: ..."` string with
/// the raw upstream error text in place of their caption.
pub async fn post_captions(
	State(state): State<AppState>,
	Json(request): Json<BatchCaptionApiRequest>,
) -> Result<Json<HashMap<String, String>>, HandlerError> {
	info!(
		"Received batch caption request for {} platform(s)",
		request.platforms.len()
	);

	let request = request.into_generation_request();
	let progress = ProgressChannel::new();
	match state.generator.generate_set(&request, &progress).await {
		Ok(results) => Ok(Json(
			results
				.into_iter()
				.map(|(platform, result)| (platform, result.into_output_string()))
				.collect(),
		)),
		Err(e) => Err(map_generation_error(e)),
	}
}

fn map_generation_error(error: GenerationError) -> HandlerError {
	match error {
		GenerationError::Validation(e) => (
			StatusCode::BAD_REQUEST,
			Json(ErrorResponse::new(e.to_string())),
		),
		GenerationError::Completion(e) => map_completion_error(e),
	}
}

fn map_completion_error(error: CompletionError) -> HandlerError {
	match error {
		// Missing credential is a server misconfiguration; the body says
		// which variable to set, which leaks nothing sensitive.
		CompletionError::Configuration { .. } => (
			StatusCode::INTERNAL_SERVER_ERROR,
			Json(ErrorResponse::new(error.to_string())),
		),
		CompletionError::HttpStatus { status_code, .. } => (
			StatusCode::from_u16(status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
			Json(ErrorResponse::new("Caption generation failed")),
		),
		CompletionError::Http(_) => (
			StatusCode::INTERNAL_SERVER_ERROR,
			Json(ErrorResponse::new("Caption generation failed")),
		),
		CompletionError::InvalidResponse { .. } => (
			StatusCode::INTERNAL_SERVER_ERROR,
			Json(ErrorResponse::new(
				"Invalid response from completion service",
			)),
		),
	}
}
