//! # MQTT Retained Purge
//!
//! Bulk-deletion engine for MQTT retained messages: given a topic pattern,
//! resolve the matching topics known to hold retained data, enforce a
//! safety limit, clear them with bounded concurrency under a shared
//! deadline, and report a structured outcome.
//!
//! ## Features
//!
//! - **Wildcard Patterns**: `+` (single level) and `#` (trailing
//!   multi-level) with strict placement validation
//! - **Safety Limit**: a fail-fast gate blocks runaway bulk deletes before
//!   any broker mutation
//! - **Bounded Concurrency**: at most N clear publishes in flight,
//!   protecting the shared broker connection
//! - **Partial-Failure Tolerance**: one topic's failure never aborts its
//!   siblings; every candidate gets an outcome
//! - **Cooperative Cancellation & Deadline**: two independent stop signals;
//!   in-flight publishes finish, pending ones are abandoned
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use mqtt_retained_purge::{
//! 	MqttRetainedStore, PurgeCommand, RetainedPurger, SharedTopicIndex,
//! };
//! use rumqttc::{AsyncClient, MqttOptions};
//! use tokio_util::sync::CancellationToken;
//!
//! #[tokio::main]
//! async fn main() {
//! 	let options = MqttOptions::new("purge-client", "localhost", 1883);
//! 	let (client, _event_loop) = AsyncClient::new(options, 10);
//!
//! 	// The host's ingestion pipeline keeps the index current
//! 	let index = Arc::new(SharedTopicIndex::new());
//! 	index.record("sensors/garage/temp");
//! 	index.record("sensors/garage/humidity");
//!
//! 	let purger = RetainedPurger::new(
//! 		index.clone(),
//! 		MqttRetainedStore::new(client),
//! 	);
//!
//! 	let command = PurgeCommand::new("sensors/garage/#");
//! 	let result = purger.purge(&command, CancellationToken::new()).await;
//! 	println!("{}", result.summary);
//! }
//! ```
//!
//! ## Pattern Semantics
//!
//! - `+` matches exactly one topic level and must occupy a whole segment
//! - `#` matches the remaining levels including zero (`foo/#` also matches
//!   `foo`) and must be the entire final segment
//! - Patterns without wildcards match only the exact topic, never children

#![warn(missing_docs)]

// Core modules
pub mod broker;
pub mod purge;
pub mod topic;

// === Core Public API ===
pub use broker::{
	MqttRetainedStore, RetainedMessageStore, SharedTopicIndex, TopicIndex,
	TransportError,
};
pub use purge::{
	ClearError, PurgeCommand, PurgeResult, PurgeSettings, PurgeStatus,
	RetainedPurger, TopicMatchSet, TopicOutcome,
};
// Topic pattern types (for manual pattern handling)
pub use topic::{TopicPatternError, TopicPatternPath};

/// Prelude module for convenient imports
///
/// Essential types for driving a retained purge with a single import line:
///
/// ```rust
/// use mqtt_retained_purge::prelude::*;
/// ```
pub mod prelude {
	pub use crate::{
		MqttRetainedStore, PurgeCommand, PurgeResult, PurgeSettings,
		PurgeStatus, RetainedPurger, SharedTopicIndex,
	};
}

/// Error types used throughout the library
///
/// Re-exports all error types in one convenient location for error
/// handling.
pub mod errors {
	pub use crate::broker::TransportError;
	pub use crate::purge::ClearError;
	pub use crate::topic::TopicPatternError;
}
