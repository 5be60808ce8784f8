//! Purge command construction and defaults

use std::num::NonZeroUsize;
use std::time::Duration;

use arcstr::ArcStr;

/// Default safety limit on affected topics.
pub const DEFAULT_MAX_TOPICS: usize = 500;
/// Default number of concurrent clear operations.
pub const DEFAULT_PARALLELISM: usize = 4;
/// Default batch deadline in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Purge defaults as loaded from the host's settings store.
///
/// The engine never reads settings storage itself; the host constructs this
/// once and derives commands from it.
#[derive(Debug, Clone)]
pub struct PurgeSettings {
	/// Maximum number of topics a single purge may affect
	pub max_topics: usize,
	/// Number of clear operations allowed to run concurrently
	pub parallelism: NonZeroUsize,
	/// Shared deadline for the whole batch
	pub timeout: Duration,
}

impl Default for PurgeSettings {
	fn default() -> Self {
		Self {
			max_topics: DEFAULT_MAX_TOPICS,
			parallelism: NonZeroUsize::new(DEFAULT_PARALLELISM)
				.expect("default parallelism is non-zero"),
			timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
		}
	}
}

/// Immutable description of one retained-purge invocation.
///
/// Built from a raw pattern string plus [`PurgeSettings`] defaults; the
/// pattern is validated by the engine, not here, so a malformed pattern
/// still produces a structured result rather than a constructor error.
#[derive(Debug, Clone)]
pub struct PurgeCommand {
	/// Topic pattern selecting the retained topics to clear
	pub pattern: ArcStr,
	/// Maximum number of topics this command may affect
	pub max_topics: usize,
	/// Whether the host should confirm before invoking the engine.
	///
	/// Confirmation is entirely the caller's policy; the engine never
	/// prompts and treats a false value as "already confirmed".
	pub require_confirmation: bool,
	/// Number of clear operations allowed to run concurrently
	pub parallelism: NonZeroUsize,
	/// Shared deadline for the whole batch
	pub timeout: Duration,
}

impl PurgeCommand {
	/// Creates a command with default settings.
	pub fn new(pattern: impl Into<ArcStr>) -> Self {
		Self::with_settings(pattern, &PurgeSettings::default())
	}

	/// Creates a command from host-provided settings.
	pub fn with_settings(
		pattern: impl Into<ArcStr>,
		settings: &PurgeSettings,
	) -> Self {
		Self {
			pattern: pattern.into(),
			max_topics: settings.max_topics,
			require_confirmation: false,
			parallelism: settings.parallelism,
			timeout: settings.timeout,
		}
	}

	/// Sets the maximum-affected-topics limit.
	pub fn with_max_topics(mut self, max_topics: usize) -> Self {
		self.max_topics = max_topics;
		self
	}

	/// Marks the command as requiring caller-side confirmation.
	pub fn with_confirmation(mut self, require: bool) -> Self {
		self.require_confirmation = require;
		self
	}

	/// Sets the concurrent-clear bound.
	pub fn with_parallelism(mut self, parallelism: NonZeroUsize) -> Self {
		self.parallelism = parallelism;
		self
	}

	/// Sets the batch deadline.
	pub fn with_timeout(mut self, timeout: Duration) -> Self {
		self.timeout = timeout;
		self
	}
}
