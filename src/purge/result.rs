//! Purge outcome types and result aggregation

use std::time::Duration;

use arcstr::ArcStr;
use thiserror::Error;

use super::resolver::TopicMatchSet;
use crate::broker::TransportError;

/// Lifecycle state of a purge operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurgeStatus {
	/// No purge has been started yet
	NotStarted,
	/// A batch is currently running
	InProgress,
	/// All candidates attempted and all succeeded (includes zero matches)
	Completed,
	/// All candidates attempted, at least one failed
	CompletedWithErrors,
	/// Candidate count exceeded the safety limit; nothing was deleted
	ExceededLimit,
	/// Cancellation observed; at least one candidate was never attempted
	Cancelled,
	/// The operation faulted before any candidate was dispatched
	Failed,
}

impl PurgeStatus {
	/// Returns true for states that end an operation.
	pub fn is_terminal(&self) -> bool {
		!matches!(self, PurgeStatus::NotStarted | PurgeStatus::InProgress)
	}
}

/// Why a single candidate topic was not cleared.
#[derive(Error, Debug)]
pub enum ClearError {
	/// The clear publish failed in the transport
	#[error(transparent)]
	Transport(#[from] TransportError),

	/// The batch deadline elapsed before this topic finished
	#[error("Batch deadline elapsed")]
	DeadlineExceeded,

	/// Cancellation stopped this topic from ever being dispatched
	#[error("Cancelled before dispatch")]
	Abandoned,
}

/// Outcome of one candidate topic.
#[derive(Debug)]
pub struct TopicOutcome {
	/// The exact topic the clear targeted
	pub topic: ArcStr,
	/// Failure detail; `None` means the retained message was cleared
	pub error: Option<ClearError>,
	/// Time spent on this candidate, zero if never dispatched
	pub elapsed: Duration,
}

impl TopicOutcome {
	/// Successful clear.
	pub fn success(topic: ArcStr, elapsed: Duration) -> Self {
		Self {
			topic,
			error: None,
			elapsed,
		}
	}

	/// Failed clear.
	pub fn failed(topic: ArcStr, error: ClearError, elapsed: Duration) -> Self {
		Self {
			topic,
			error: Some(error),
			elapsed,
		}
	}

	/// Candidate never dispatched because cancellation was observed.
	pub fn abandoned(topic: ArcStr) -> Self {
		Self::failed(topic, ClearError::Abandoned, Duration::ZERO)
	}

	/// Returns true if the retained message was cleared.
	pub fn is_success(&self) -> bool {
		self.error.is_none()
	}

	/// Returns true if this candidate was abandoned by cancellation.
	pub fn is_abandoned(&self) -> bool {
		matches!(self.error, Some(ClearError::Abandoned))
	}
}

/// Aggregate result of one purge invocation.
///
/// Owned exclusively by the caller after return; the engine keeps no
/// reference. `summary` is for humans, callers must never parse it for
/// control flow.
#[derive(Debug)]
pub struct PurgeResult {
	/// Terminal status of the operation
	pub status: PurgeStatus,
	/// Human-readable outcome description with counts
	pub summary: String,
	/// Candidate count fixed at resolution time
	pub matched: usize,
	/// Number of retained messages actually cleared
	pub deleted: usize,
	/// Number of candidates that failed or were abandoned
	pub failed: usize,
	/// Per-topic detail for every unsuccessful candidate; successes are
	/// not itemized
	pub failures: Vec<TopicOutcome>,
}

impl PurgeResult {
	/// Merges per-topic outcomes into the final result.
	///
	/// Status precedence: `Cancelled` whenever cancellation was observed and
	/// any candidate went un-attempted, then `CompletedWithErrors` if any
	/// attempted candidate failed, then `Completed`. Deadline-abandoned
	/// candidates count as failures, not as cancellation.
	pub fn aggregate(
		pattern: &str,
		candidates: &TopicMatchSet,
		outcomes: Vec<TopicOutcome>,
		was_cancelled: bool,
	) -> Self {
		debug_assert_eq!(candidates.len(), outcomes.len());
		let matched = candidates.len();
		let deleted = outcomes.iter().filter(|o| o.is_success()).count();
		let failures: Vec<TopicOutcome> =
			outcomes.into_iter().filter(|o| !o.is_success()).collect();
		let failed = failures.len();
		let abandoned =
			failures.iter().filter(|o| o.is_abandoned()).count();

		let status = if was_cancelled && abandoned > 0 {
			PurgeStatus::Cancelled
		} else if failed > 0 {
			PurgeStatus::CompletedWithErrors
		} else {
			PurgeStatus::Completed
		};

		let summary = match status {
			| PurgeStatus::Cancelled => format!(
				"Purge of '{pattern}' cancelled: {deleted} of {matched} \
				 retained message(s) cleared, {abandoned} never attempted"
			),
			| PurgeStatus::CompletedWithErrors => format!(
				"Cleared {deleted} of {matched} retained message(s) for \
				 '{pattern}', {failed} failed"
			),
			| _ if matched == 0 => format!(
				"No retained messages found matching '{pattern}'"
			),
			| _ => format!(
				"Cleared {deleted} retained message(s) matching '{pattern}'"
			),
		};

		Self {
			status,
			summary,
			matched,
			deleted,
			failed,
			failures,
		}
	}

	/// Result for a limit breach: nothing was or will be deleted.
	pub fn exceeded_limit(pattern: &str, matched: usize, limit: usize) -> Self {
		Self {
			status: PurgeStatus::ExceededLimit,
			summary: format!(
				"Pattern '{pattern}' matches {matched} retained topic(s), \
				 exceeding the limit of {limit}; nothing was deleted"
			),
			matched,
			deleted: 0,
			failed: 0,
			failures: Vec::new(),
		}
	}

	/// Result for a fault before any candidate was dispatched.
	pub fn rejected(message: impl Into<String>) -> Self {
		Self {
			status: PurgeStatus::Failed,
			summary: message.into(),
			matched: 0,
			deleted: 0,
			failed: 0,
			failures: Vec::new(),
		}
	}

	/// Returns true if every matched retained message was cleared.
	pub fn is_complete_success(&self) -> bool {
		self.status == PurgeStatus::Completed
	}
}
