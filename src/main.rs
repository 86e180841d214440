//! Traption Server
//!
//! Main entry point for the caption generation server

use traption::TraptionBuilder;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	// Start the complete server with all defaults and setup handled automatically
	TraptionBuilder::new().start_server().await
}
