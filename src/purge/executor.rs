//! Bounded-concurrency execution of a clear batch

use std::num::NonZeroUsize;
use std::time::Duration;

use arcstr::ArcStr;
use futures::StreamExt;
use futures::stream::FuturesUnordered;
use tokio::sync::Semaphore;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use super::result::{ClearError, TopicOutcome};
use crate::broker::RetainedMessageStore;
use crate::purge::resolver::TopicMatchSet;

/// Runs one clear operation per candidate with at most `parallelism`
/// publishes in flight, all racing a single batch deadline.
///
/// Cancellation stops not-yet-dispatched candidates immediately; in-flight
/// publishes are allowed to finish on their own. The deadline additionally
/// bounds in-flight publishes. Exactly one outcome is produced per
/// candidate; completion order is unspecified.
pub async fn execute_clear_batch<S: RetainedMessageStore>(
	store: &S,
	candidates: &TopicMatchSet,
	parallelism: NonZeroUsize,
	timeout: Duration,
	cancel: &CancellationToken,
) -> Vec<TopicOutcome> {
	let deadline = Instant::now() + timeout;
	let semaphore = Semaphore::new(parallelism.get());

	let mut in_flight: FuturesUnordered<_> = candidates
		.iter()
		.map(|topic| {
			clear_one(store, topic.clone(), &semaphore, deadline, cancel)
		})
		.collect();

	let mut outcomes = Vec::with_capacity(candidates.len());
	while let Some(outcome) = in_flight.next().await {
		outcomes.push(outcome);
	}
	outcomes
}

/// Clears a single topic once a worker slot is available.
async fn clear_one<S: RetainedMessageStore>(
	store: &S,
	topic: ArcStr,
	semaphore: &Semaphore,
	deadline: Instant,
	cancel: &CancellationToken,
) -> TopicOutcome {
	// Dispatch gate: a permit bounds system-wide concurrency, and both
	// stop signals (cancellation, deadline) are observed before dispatch.
	let _permit = tokio::select! {
		biased;
		() = cancel.cancelled() => {
			debug!(topic = %topic, "Candidate abandoned by cancellation");
			return TopicOutcome::abandoned(topic);
		}
		() = tokio::time::sleep_until(deadline) => {
			warn!(topic = %topic, "Candidate abandoned by batch deadline");
			return TopicOutcome::failed(
				topic,
				ClearError::DeadlineExceeded,
				Duration::ZERO,
			);
		}
		permit = semaphore.acquire() => match permit {
			| Ok(permit) => permit,
			// Semaphore is never closed in this batch
			| Err(_) => return TopicOutcome::abandoned(topic),
		},
	};

	// Dispatched: only the deadline can still interrupt. Cancellation lets
	// an in-flight publish run to completion and its outcome is recorded.
	let started = Instant::now();
	tokio::select! {
		result = store.clear_retained(&topic) => match result {
			| Ok(()) => TopicOutcome::success(topic, started.elapsed()),
			| Err(err) => {
				warn!(topic = %topic, error = %err, "Clear retained failed");
				TopicOutcome::failed(
					topic,
					ClearError::Transport(err),
					started.elapsed(),
				)
			}
		},
		() = tokio::time::sleep_until(deadline) => {
			warn!(topic = %topic, "Clear retained timed out");
			TopicOutcome::failed(
				topic,
				ClearError::DeadlineExceeded,
				started.elapsed(),
			)
		}
	}
}
