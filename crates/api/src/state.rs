use std::sync::Arc;

use traption_service::GeneratorService;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
	pub generator: Arc<GeneratorService>,
}
