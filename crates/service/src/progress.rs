//! Per-request progress channel
//!
//! A scoped publish/subscribe handle created for one generation batch and
//! dropped when the caller stops listening. Multiple independent observers
//! may subscribe; emission is synchronous fire-and-forget, so events with
//! no observer registered at emission time are simply dropped and late
//! subscribers do not see earlier transitions.

use tokio::sync::broadcast;

use traption_types::ProgressEvent;

const DEFAULT_CAPACITY: usize = 64;

/// Publish side of a generation batch's progress stream
pub struct ProgressChannel {
	sender: broadcast::Sender<ProgressEvent>,
}

impl ProgressChannel {
	pub fn new() -> Self {
		Self::with_capacity(DEFAULT_CAPACITY)
	}

	pub fn with_capacity(capacity: usize) -> Self {
		let (sender, _) = broadcast::channel(capacity);
		Self { sender }
	}

	/// Register an observer for subsequent events
	pub fn subscribe(&self) -> broadcast::Receiver<ProgressEvent> {
		self.sender.subscribe()
	}

	/// Publish one lifecycle transition
	///
	/// Send errors mean no observer is registered; they are ignored.
	pub fn emit(&self, event: ProgressEvent) {
		let _ = self.sender.send(event);
	}

	pub fn observer_count(&self) -> usize {
		self.sender.receiver_count()
	}
}

impl Default for ProgressChannel {
	fn default() -> Self {
		Self::new()
	}
}
