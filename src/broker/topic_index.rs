//! Index of topics currently holding retained messages

use std::collections::BTreeSet;
use std::sync::RwLock;

use arcstr::ArcStr;

/// Source of the "known retained topics" snapshot.
///
/// Implementations are expected to be fed by the host's message ingestion
/// pipeline; the purge engine only ever reads. `snapshot()` must return an
/// owned copy so a running purge batch is unaffected by concurrent index
/// updates.
pub trait TopicIndex: Send + Sync {
	/// Returns a point-in-time copy of all known retained topics.
	fn snapshot(&self) -> Vec<ArcStr>;
}

/// Standard in-process topic index.
///
/// A sorted set behind an `RwLock`: ingestion records topics as retained
/// messages arrive and forgets them when a clear is observed. The lock is
/// held only for the duration of a single call, never across a purge batch.
#[derive(Debug, Default)]
pub struct SharedTopicIndex {
	topics: RwLock<BTreeSet<ArcStr>>,
}

impl SharedTopicIndex {
	/// Creates an empty index.
	pub fn new() -> Self {
		Self::default()
	}

	/// Records a topic as holding a retained message.
	pub fn record(&self, topic: impl Into<ArcStr>) {
		let mut topics = self.topics.write().unwrap_or_else(|e| e.into_inner());
		topics.insert(topic.into());
	}

	/// Removes a topic, typically after its retained message was cleared.
	pub fn forget(&self, topic: &str) {
		let mut topics = self.topics.write().unwrap_or_else(|e| e.into_inner());
		topics.remove(topic);
	}

	/// Returns the number of known retained topics.
	pub fn len(&self) -> usize {
		let topics = self.topics.read().unwrap_or_else(|e| e.into_inner());
		topics.len()
	}

	/// Returns true if no retained topics are known.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

impl TopicIndex for SharedTopicIndex {
	fn snapshot(&self) -> Vec<ArcStr> {
		let topics = self.topics.read().unwrap_or_else(|e| e.into_inner());
		topics.iter().cloned().collect()
	}
}

impl<T: TopicIndex> TopicIndex for std::sync::Arc<T> {
	fn snapshot(&self) -> Vec<ArcStr> {
		self.as_ref().snapshot()
	}
}

impl<T: TopicIndex> TopicIndex for &T {
	fn snapshot(&self) -> Vec<ArcStr> {
		(*self).snapshot()
	}
}

impl FromIterator<ArcStr> for SharedTopicIndex {
	fn from_iter<I: IntoIterator<Item = ArcStr>>(iter: I) -> Self {
		Self {
			topics: RwLock::new(iter.into_iter().collect()),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_record_and_forget() {
		let index = SharedTopicIndex::new();
		index.record("sensors/a");
		index.record("sensors/b");
		index.record("sensors/a"); // duplicate is a no-op
		assert_eq!(index.len(), 2);

		index.forget("sensors/a");
		assert_eq!(index.snapshot(), vec![ArcStr::from("sensors/b")]);
	}

	#[test]
	fn test_snapshot_is_detached() {
		let index = SharedTopicIndex::new();
		index.record("a");
		let snapshot = index.snapshot();
		index.record("b");
		assert_eq!(snapshot.len(), 1);
		assert_eq!(index.len(), 2);
	}

	#[test]
	fn test_snapshot_is_sorted() {
		let index: SharedTopicIndex =
			[ArcStr::from("b"), ArcStr::from("a"), ArcStr::from("c")]
				.into_iter()
				.collect();
		let snapshot = index.snapshot();
		assert_eq!(snapshot, vec!["a", "b", "c"]);
	}
}
