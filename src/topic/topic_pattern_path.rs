//! Validated MQTT topic patterns with wildcard matching

use std::convert::TryFrom;
use std::slice::Iter;

use arcstr::ArcStr;

use super::PatternResult;
use super::topic_pattern_item::{TopicPatternError, TopicPatternItem};

/// Parsed and validated MQTT topic pattern.
///
/// Construction enforces wildcard placement rules; a value of this type is
/// always a well-formed pattern. Matching is pure and safe to share across
/// tasks.
#[derive(Debug, Clone)]
pub struct TopicPatternPath {
	pattern: ArcStr,
	segments: Vec<TopicPatternItem>,
}

impl TopicPatternPath {
	/// Parses a pattern string, validating wildcard placement.
	///
	/// - `#` must be the entire final segment
	/// - `+` must occupy a whole segment
	/// - the pattern must be non-empty
	pub fn new_from_string(
		topic_pattern: impl Into<ArcStr>,
	) -> PatternResult<Self> {
		let topic_pattern = topic_pattern.into();
		if topic_pattern.is_empty() || topic_pattern.trim().is_empty() {
			return Err(TopicPatternError::EmptyPattern);
		}

		let segments: Result<Vec<_>, _> = topic_pattern
			.split('/')
			.map(|s| topic_pattern.substr_from(s))
			.map(TopicPatternItem::try_from)
			.collect();
		let segments = segments?;

		if let Some(hash_pos) = segments
			.iter()
			.position(|s| matches!(*s, TopicPatternItem::Hash))
		{
			if hash_pos != segments.len() - 1 {
				return Err(TopicPatternError::hash_position(
					topic_pattern.as_str(),
				));
			}
		}

		Ok(Self {
			pattern: topic_pattern,
			segments,
		})
	}

	/// Returns the original pattern string.
	pub fn pattern(&self) -> ArcStr {
		self.pattern.clone()
	}

	/// Returns true if pattern contains any wildcard segment.
	pub fn has_wildcards(&self) -> bool {
		self.segments.iter().any(TopicPatternItem::is_wildcard)
	}

	/// Returns true if pattern ends with the multi-level wildcard (#).
	pub fn contains_hash(&self) -> bool {
		self.segments
			.last()
			.is_some_and(|s| matches!(s, TopicPatternItem::Hash))
	}

	/// Returns iterator over pattern segments.
	pub fn iter(&self) -> Iter<TopicPatternItem> {
		self.segments.iter()
	}

	/// Returns number of segments in pattern.
	pub fn len(&self) -> usize {
		self.segments.len()
	}

	/// Returns true if pattern has no segments.
	pub fn is_empty(&self) -> bool {
		self.segments.is_empty()
	}

	/// Matches a concrete topic against this pattern, segment by segment.
	///
	/// Literal segments require exact equality, `+` consumes exactly one
	/// topic segment and `#` consumes the remainder including zero segments
	/// (`foo/#` matches `foo` itself). Patterns without wildcards match only
	/// the identical topic string, never its children.
	pub fn matches(&self, topic: &str) -> bool {
		// Fast path: no wildcards means plain string equality
		if !self.has_wildcards() {
			return self.pattern.as_str() == topic;
		}

		let mut topic_segments = topic.split('/');
		for pattern_segment in &self.segments {
			match pattern_segment {
				| TopicPatternItem::Str(expected) => {
					match topic_segments.next() {
						| Some(actual) if actual == expected.as_str() => {}
						| _ => return false,
					}
				}
				| TopicPatternItem::Plus => {
					if topic_segments.next().is_none() {
						return false;
					}
				}
				| TopicPatternItem::Hash => return true,
			}
		}
		// Pattern exhausted: topic must be exhausted too
		topic_segments.next().is_none()
	}
}

impl std::fmt::Display for TopicPatternPath {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.pattern)
	}
}

impl TryFrom<String> for TopicPatternPath {
	type Error = TopicPatternError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		Self::new_from_string(value)
	}
}

impl TryFrom<&str> for TopicPatternPath {
	type Error = TopicPatternError;

	fn try_from(value: &str) -> Result<Self, Self::Error> {
		Self::new_from_string(value)
	}
}

impl TryFrom<ArcStr> for TopicPatternPath {
	type Error = TopicPatternError;

	fn try_from(value: ArcStr) -> Result<Self, Self::Error> {
		Self::new_from_string(value)
	}
}
