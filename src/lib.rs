//! Traption Library
//!
//! A caption generation service for social platforms: prompt templating,
//! chat-completion fan-out with per-platform progress reporting, and a
//! REST surface for the browser frontend.

// Core domain types - the most commonly used types
pub use traption_types::{
	serde_json,
	BatchCaptionApiRequest,
	CaptionApiRequest,
	CaptionLength,
	CaptionOutput,
	CaptionResponse,
	// Error types
	CompletionError,
	// Provider seam
	CompletionProvider,
	CompletionRequest,
	CompletionResult,
	GenerationError,
	// Primary domain entities
	GenerationRequest,
	GenerationValidationError,
	PlatformResult,
	PlatformStatus,
	ProgressEvent,
	PromptPair,
	SecretString,
	Style,
	Tone,
	ERROR_PREFIX,
};

// Service layer
pub use traption_service::{build_prompts, GeneratorService, ProgressChannel};

// Completion client
pub use traption_completion::OpenAiClient;

// API layer
pub use traption_api::{create_router, AppState, ErrorResponse};

// Config
pub use traption_config::{load_config, ConfigurableValue, LogFormat, Settings};

// Module aliases for direct access to the member crates
pub mod types {
	pub use traption_types::*;
}

pub mod service {
	pub use traption_service::*;
}

pub mod completion {
	pub use traption_completion::*;
}

pub mod config {
	pub use traption_config::*;
}

pub mod api {
	pub use traption_api::*;
}

pub mod mocks;

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, warn};

// Re-export external dependencies for examples
pub use async_trait;
pub use reqwest;

/// Builder pattern for configuring the caption service
pub struct TraptionBuilder {
	settings: Option<Settings>,
	provider: Option<Arc<dyn CompletionProvider>>,
}

impl Default for TraptionBuilder {
	fn default() -> Self {
		Self::new()
	}
}

impl TraptionBuilder {
	pub fn new() -> Self {
		Self {
			settings: None,
			provider: None,
		}
	}

	/// Set custom settings
	pub fn with_settings(mut self, settings: Settings) -> Self {
		self.settings = Some(settings);
		self
	}

	/// Substitute a custom completion provider (mocks, alternative vendors)
	pub fn with_provider(mut self, provider: Arc<dyn CompletionProvider>) -> Self {
		self.provider = Some(provider);
		self
	}

	/// Get the current settings
	pub fn settings(&self) -> Option<&Settings> {
		self.settings.as_ref()
	}

	/// Wire the service and return the configured router with state
	pub fn start(self) -> Result<(axum::Router, AppState), Box<dyn std::error::Error>> {
		let settings = self.settings.unwrap_or_default();

		let provider = match self.provider {
			Some(provider) => provider,
			None => {
				// A missing credential is reported per request as the
				// documented 500, not a startup failure; warn so the
				// operator sees it early anyway.
				if let Err(e) = settings.completion.api_key.resolve() {
					warn!(
						"Completion credential not resolvable at startup: {}. \
						Caption requests will fail until it is set.",
						e
					);
				}
				Arc::new(OpenAiClient::from_settings(
					&settings.completion,
					&settings.timeouts,
				)?) as Arc<dyn CompletionProvider>
			},
		};

		let generator = GeneratorService::new(provider);
		info!(
			"Using completion provider '{}' with model '{}'",
			generator.provider_name(),
			settings.completion.model
		);

		let app_state = AppState {
			generator: Arc::new(generator),
		};
		let router = create_router().with_state(app_state.clone());

		Ok((router, app_state))
	}

	/// Start the complete server with all defaults and setup
	///
	/// Handles everything needed to run the server: loading `.env`,
	/// loading configuration with defaults, initializing tracing, and
	/// binding and serving the application.
	pub async fn start_server(mut self) -> Result<(), Box<dyn std::error::Error>> {
		// Load .env file if it exists
		dotenvy::dotenv().ok();

		let using_provided_settings = self.settings.is_some();
		let settings = match self.settings.take() {
			Some(settings) => settings,
			None => load_config().unwrap_or_default(),
		};

		self.init_tracing_from_settings(&settings)?;

		info!(
			"Using configuration: loaded from {}",
			if using_provided_settings {
				"provided settings"
			} else {
				"config file or defaults"
			}
		);
		info!(
			"Completion endpoint: {} (model {})",
			settings.completion.api_url, settings.completion.model
		);
		info!(
			"Completion credential source: {}",
			settings.completion.api_key.description()
		);

		let bind_addr = settings.bind_address();
		let addr: SocketAddr = bind_addr
			.parse()
			.map_err(|e| format!("Invalid bind address '{}': {}", bind_addr, e))?;

		self.settings = Some(settings);
		let (app, _) = self.start()?;

		let listener = tokio::net::TcpListener::bind(addr).await?;

		info!("Traption server listening on {}", bind_addr);
		info!("API endpoints available:");
		info!("  GET  /health");
		info!("  POST /v1/caption");
		info!("  POST /v1/captions");

		axum::serve(listener, app).await?;

		Ok(())
	}

	/// Initialize tracing with configuration-based settings
	fn init_tracing_from_settings(
		&self,
		settings: &Settings,
	) -> Result<(), Box<dyn std::error::Error>> {
		let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
			.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&settings.logging.level));

		match settings.logging.format {
			LogFormat::Json => {
				let subscriber = tracing_subscriber::fmt().json().with_env_filter(env_filter);

				if settings.logging.structured {
					subscriber.with_target(true).with_thread_ids(true).init();
				} else {
					subscriber.init();
				}
			},
			LogFormat::Pretty => {
				let subscriber = tracing_subscriber::fmt()
					.pretty()
					.with_env_filter(env_filter);

				if settings.logging.structured {
					subscriber.with_target(true).with_thread_ids(true).init();
				} else {
					subscriber.init();
				}
			},
			LogFormat::Compact => {
				let subscriber = tracing_subscriber::fmt()
					.compact()
					.with_env_filter(env_filter);

				if settings.logging.structured {
					subscriber.with_target(true).with_thread_ids(true).init();
				} else {
					subscriber.init();
				}
			},
		}

		info!(
			"Logging configuration applied: level={}, format={:?}, structured={}",
			settings.logging.level, settings.logging.format, settings.logging.structured
		);

		Ok(())
	}
}
