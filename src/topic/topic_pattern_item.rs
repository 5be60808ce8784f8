//! MQTT topic pattern segment types and validation

use std::convert::TryFrom;

use arcstr::Substr;
use thiserror::Error;

/// Error types for topic pattern parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TopicPatternError {
	/// Hash wildcard (#) misplaced: embedded in a segment or not last
	#[error(
		"Invalid topic pattern '{pattern}': # wildcard must be the entire \
		 final segment"
	)]
	HashPosition {
		/// The invalid pattern
		pattern: String,
	},

	/// Plus wildcard (+) concatenated with other characters in a segment
	#[error(
		"Invalid topic pattern segment '{segment}': + wildcard must occupy \
		 an entire segment"
	)]
	WildcardSegment {
		/// The malformed segment
		segment: String,
	},

	/// Empty pattern is not valid
	#[error("Topic pattern cannot be empty")]
	EmptyPattern,
}

impl TopicPatternError {
	/// Creates a new HashPosition error
	pub fn hash_position(pattern: impl Into<String>) -> Self {
		Self::HashPosition {
			pattern: pattern.into(),
		}
	}

	/// Creates a new WildcardSegment error
	pub fn wildcard_segment(segment: impl Into<String>) -> Self {
		Self::WildcardSegment {
			segment: segment.into(),
		}
	}
}

/// MQTT topic pattern segment: literal string or wildcard
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TopicPatternItem {
	/// Literal string segment, matched by exact equality
	Str(Substr),
	/// Single-level wildcard `+`, consumes exactly one topic segment
	Plus,
	/// Multi-level wildcard `#`, consumes the remaining segments (or none)
	Hash,
}

impl TopicPatternItem {
	/// Returns string representation of the pattern item.
	pub fn as_str(&self) -> &str {
		match self {
			| TopicPatternItem::Str(s) => s,
			| TopicPatternItem::Plus => "+",
			| TopicPatternItem::Hash => "#",
		}
	}

	/// Returns true if this item is a wildcard (+ or #).
	pub fn is_wildcard(&self) -> bool {
		matches!(self, TopicPatternItem::Plus | TopicPatternItem::Hash)
	}
}

impl std::fmt::Display for TopicPatternItem {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.as_str())
	}
}

impl TryFrom<Substr> for TopicPatternItem {
	type Error = TopicPatternError;

	fn try_from(item: Substr) -> Result<Self, Self::Error> {
		let res = match item.as_str() {
			| "+" => TopicPatternItem::Plus,
			| "#" => TopicPatternItem::Hash,
			| _ if item.contains('#') => {
				// '#' glued to other characters, e.g. "foo#"
				return Err(TopicPatternError::hash_position(item.as_str()));
			}
			| _ if item.contains('+') => {
				return Err(TopicPatternError::wildcard_segment(item.as_str()));
			}
			| _ => TopicPatternItem::Str(item),
		};
		Ok(res)
	}
}
