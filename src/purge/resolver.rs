//! Candidate resolution: known topics filtered by pattern

use std::collections::BTreeSet;

use arcstr::ArcStr;
use tracing::debug;

use crate::broker::TopicIndex;
use crate::topic::TopicPatternPath;

/// Resolved deletion candidates.
///
/// An owned, sorted, de-duplicated snapshot of the topics a purge will
/// attempt to clear. Generated once per invocation and never mutated during
/// execution, so retained messages arriving mid-batch are not picked up.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopicMatchSet {
	topics: Vec<ArcStr>,
}

impl TopicMatchSet {
	/// Resolves the candidate set for `pattern` against the index snapshot.
	///
	/// An index with zero known topics yields an empty set, not an error.
	pub fn resolve(
		pattern: &TopicPatternPath,
		index: &impl TopicIndex,
	) -> Self {
		let known = index.snapshot();
		let matched: BTreeSet<ArcStr> = known
			.into_iter()
			.filter(|topic| pattern.matches(topic))
			.collect();
		let topics: Vec<ArcStr> = matched.into_iter().collect();
		debug!(
			pattern = %pattern,
			matched = topics.len(),
			"Resolved retained purge candidates"
		);
		Self { topics }
	}

	/// Returns the number of candidate topics.
	pub fn len(&self) -> usize {
		self.topics.len()
	}

	/// Returns true if no topics matched.
	pub fn is_empty(&self) -> bool {
		self.topics.is_empty()
	}

	/// Returns iterator over candidate topics in sorted order.
	pub fn iter(&self) -> std::slice::Iter<'_, ArcStr> {
		self.topics.iter()
	}

	/// Returns the candidates as a slice.
	pub fn as_slice(&self) -> &[ArcStr] {
		&self.topics
	}
}

impl FromIterator<ArcStr> for TopicMatchSet {
	fn from_iter<I: IntoIterator<Item = ArcStr>>(iter: I) -> Self {
		let matched: BTreeSet<ArcStr> = iter.into_iter().collect();
		Self {
			topics: matched.into_iter().collect(),
		}
	}
}

impl<'a> IntoIterator for &'a TopicMatchSet {
	type Item = &'a ArcStr;
	type IntoIter = std::slice::Iter<'a, ArcStr>;

	fn into_iter(self) -> Self::IntoIter {
		self.topics.iter()
	}
}
