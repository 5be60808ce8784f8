//! The purge engine: validate, resolve, guard, execute, aggregate

use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use super::command::PurgeCommand;
use super::executor::execute_clear_batch;
use super::guard::{LimitVerdict, check_limit};
use super::resolver::TopicMatchSet;
use super::result::{PurgeResult, PurgeStatus};
use crate::broker::{RetainedMessageStore, TopicIndex};
use crate::topic::TopicPatternPath;

/// Retained-message bulk-deletion engine.
///
/// Sole public entry point is [`purge`](RetainedPurger::purge). The engine
/// reads the topic index for its candidate snapshot and issues clear
/// publishes through the transport; everything else (confirmation dialogs,
/// notifications, settings storage) belongs to the host.
#[derive(Debug)]
pub struct RetainedPurger<I, S> {
	index: I,
	store: S,
	status_tx: watch::Sender<PurgeStatus>,
}

impl<I, S> RetainedPurger<I, S>
where
	I: TopicIndex,
	S: RetainedMessageStore,
{
	/// Creates an engine over the given index and transport.
	pub fn new(index: I, store: S) -> Self {
		let (status_tx, _) = watch::channel(PurgeStatus::NotStarted);
		Self {
			index,
			store,
			status_tx,
		}
	}

	/// Returns a live view of the engine's status for progress display.
	///
	/// Observers see `InProgress` while a batch runs, then the terminal
	/// status of the last invocation.
	pub fn status(&self) -> watch::Receiver<PurgeStatus> {
		self.status_tx.subscribe()
	}

	/// Deletes all retained messages on topics matching the command's
	/// pattern.
	///
	/// Never returns an error: validation failures, limit breaches, partial
	/// failures and cancellation are all reported through [`PurgeResult`].
	/// Re-invoking with the same pattern only affects topics still present
	/// in the index. Cancellation via `cancel` is cooperative: in-flight
	/// clears finish, not-yet-started ones are abandoned.
	pub async fn purge(
		&self,
		command: &PurgeCommand,
		cancel: CancellationToken,
	) -> PurgeResult {
		let result = self.run(command, cancel).await;
		let _ = self.status_tx.send(result.status);
		result
	}

	async fn run(
		&self,
		command: &PurgeCommand,
		cancel: CancellationToken,
	) -> PurgeResult {
		let pattern = match TopicPatternPath::new_from_string(
			command.pattern.clone(),
		) {
			| Ok(pattern) => pattern,
			| Err(err) => {
				warn!(pattern = %command.pattern, error = %err, "Rejected purge command");
				return PurgeResult::rejected(err.to_string());
			}
		};
		debug!(pattern = %pattern, "Purge pattern validated");
		let _ = self.status_tx.send(PurgeStatus::InProgress);

		let candidates = TopicMatchSet::resolve(&pattern, &self.index);

		// Single fail-fast gate: runs strictly before any broker mutation
		if let LimitVerdict::ExceedsLimit { matched, limit } =
			check_limit(&candidates, command.max_topics)
		{
			return PurgeResult::exceeded_limit(
				pattern.pattern().as_str(),
				matched,
				limit,
			);
		}

		info!(
			pattern = %pattern,
			matched = candidates.len(),
			parallelism = command.parallelism.get(),
			timeout = ?command.timeout,
			"Starting retained purge batch"
		);
		let outcomes = execute_clear_batch(
			&self.store,
			&candidates,
			command.parallelism,
			command.timeout,
			&cancel,
		)
		.await;

		let result = PurgeResult::aggregate(
			pattern.pattern().as_str(),
			&candidates,
			outcomes,
			cancel.is_cancelled(),
		);
		info!(
			status = ?result.status,
			matched = result.matched,
			deleted = result.deleted,
			failed = result.failed,
			"Retained purge finished"
		);
		result
	}
}
