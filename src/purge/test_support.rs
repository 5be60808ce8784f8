//! Instrumented mock collaborators for purge tests

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::broker::{RetainedMessageStore, TransportError};

/// Transport double that records call counts and concurrency, with
/// configurable per-topic failures, artificial latency and a hook that
/// cancels a token after N completed calls.
#[derive(Debug, Default)]
pub struct MockStore {
	/// Artificial latency per clear call
	pub delay: Duration,
	/// Topics whose clear call fails with a transport error
	pub fail_topics: HashSet<&'static str>,
	/// Cancel this token once `calls` reaches the given count
	pub cancel_after: Option<(usize, CancellationToken)>,
	calls: AtomicUsize,
	in_flight: AtomicUsize,
	max_in_flight: AtomicUsize,
}

impl MockStore {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_delay(mut self, delay: Duration) -> Self {
		self.delay = delay;
		self
	}

	pub fn with_failures(
		mut self,
		topics: impl IntoIterator<Item = &'static str>,
	) -> Self {
		self.fail_topics = topics.into_iter().collect();
		self
	}

	pub fn cancel_after(mut self, calls: usize, token: CancellationToken) -> Self {
		self.cancel_after = Some((calls, token));
		self
	}

	/// Number of clear calls that ran to completion.
	pub fn calls(&self) -> usize {
		self.calls.load(Ordering::SeqCst)
	}

	/// Highest number of concurrently running clear calls observed.
	pub fn max_in_flight(&self) -> usize {
		self.max_in_flight.load(Ordering::SeqCst)
	}
}

impl RetainedMessageStore for MockStore {
	async fn clear_retained(&self, topic: &str) -> Result<(), TransportError> {
		let running = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
		self.max_in_flight.fetch_max(running, Ordering::SeqCst);

		if !self.delay.is_zero() {
			tokio::time::sleep(self.delay).await;
		}

		self.in_flight.fetch_sub(1, Ordering::SeqCst);
		let completed = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
		if let Some((after, token)) = &self.cancel_after {
			if completed == *after {
				token.cancel();
			}
		}

		if self.fail_topics.contains(topic) {
			return Err(TransportError::unavailable("simulated outage"));
		}
		Ok(())
	}
}

/// Builds `count` topics named `base/0000` .. in sorted order.
pub fn numbered_topics(base: &str, count: usize) -> Vec<arcstr::ArcStr> {
	(0 .. count)
		.map(|i| arcstr::ArcStr::from(format!("{base}/{i:04}")))
		.collect()
}
