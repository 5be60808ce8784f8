//! Tests for TopicPatternPath validation and matching

use super::topic_pattern_item::TopicPatternError;
use super::topic_pattern_path::TopicPatternPath;

fn create_pattern(pattern: &str) -> TopicPatternPath {
	TopicPatternPath::new_from_string(pattern)
		.expect("Pattern should be valid")
}

/// Validation rules for wildcard placement
mod validation_tests {
	use super::*;

	#[test]
	fn test_empty_pattern_rejected() {
		assert!(matches!(
			TopicPatternPath::new_from_string(""),
			Err(TopicPatternError::EmptyPattern)
		));
		assert!(matches!(
			TopicPatternPath::new_from_string("   "),
			Err(TopicPatternError::EmptyPattern)
		));
	}

	#[test]
	fn test_hash_glued_to_segment_rejected() {
		assert!(matches!(
			TopicPatternPath::new_from_string("foo#"),
			Err(TopicPatternError::HashPosition { .. })
		));
	}

	#[test]
	fn test_hash_mid_pattern_rejected() {
		assert!(matches!(
			TopicPatternPath::new_from_string("foo/#/bar"),
			Err(TopicPatternError::HashPosition { .. })
		));
		assert!(matches!(
			TopicPatternPath::new_from_string("#/foo"),
			Err(TopicPatternError::HashPosition { .. })
		));
	}

	#[test]
	fn test_malformed_plus_rejected() {
		assert!(matches!(
			TopicPatternPath::new_from_string("fo+o"),
			Err(TopicPatternError::WildcardSegment { .. })
		));
		assert!(matches!(
			TopicPatternPath::new_from_string("foo/+bar/baz"),
			Err(TopicPatternError::WildcardSegment { .. })
		));
	}

	#[test]
	fn test_valid_patterns_accepted() {
		for pattern in
			["#", "+", "foo", "foo/bar", "foo/#", "foo/+/baz", "+/+/#"]
		{
			assert!(
				TopicPatternPath::new_from_string(pattern).is_ok(),
				"pattern '{pattern}' should be valid"
			);
		}
	}
}

/// Segment-wise matching semantics
mod matching_tests {
	use super::*;

	#[test]
	fn test_exact_pattern_matches_only_itself() {
		let pattern = create_pattern("foo/bar");
		assert!(pattern.matches("foo/bar"));
		// No implicit subtree match for non-wildcard patterns
		assert!(!pattern.matches("foo/bar/x"));
		assert!(!pattern.matches("foo"));
		assert!(!pattern.matches("foo/baz"));
	}

	#[test]
	fn test_hash_matches_parent_and_subtree() {
		let pattern = create_pattern("foo/#");
		assert!(pattern.matches("foo"));
		assert!(pattern.matches("foo/bar"));
		assert!(pattern.matches("foo/bar/baz"));
		assert!(!pattern.matches("bar"));
		assert!(!pattern.matches("foobar"));
	}

	#[test]
	fn test_bare_hash_matches_everything() {
		let pattern = create_pattern("#");
		assert!(pattern.matches("foo"));
		assert!(pattern.matches("foo/bar/baz"));
	}

	#[test]
	fn test_plus_consumes_exactly_one_segment() {
		let pattern = create_pattern("foo/+/baz");
		assert!(pattern.matches("foo/x/baz"));
		assert!(!pattern.matches("foo/x/y/baz"));
		assert!(!pattern.matches("foo/baz"));
	}

	#[test]
	fn test_trailing_plus_requires_segment() {
		let pattern = create_pattern("foo/+");
		assert!(pattern.matches("foo/bar"));
		assert!(!pattern.matches("foo"));
		assert!(!pattern.matches("foo/bar/baz"));
	}

	#[test]
	fn test_combined_wildcards() {
		let pattern = create_pattern("home/+/sensors/#");
		assert!(pattern.matches("home/kitchen/sensors"));
		assert!(pattern.matches("home/kitchen/sensors/temp/raw"));
		assert!(!pattern.matches("home/sensors/temp"));
	}

	#[test]
	fn test_empty_levels_match_exactly() {
		let pattern = create_pattern("foo//bar");
		assert!(pattern.matches("foo//bar"));
		assert!(!pattern.matches("foo/bar"));
	}
}

mod accessor_tests {
	use super::*;

	#[test]
	fn test_pattern_preserved() {
		let pattern = create_pattern("foo/+/baz");
		assert_eq!(pattern.pattern(), "foo/+/baz");
		assert_eq!(pattern.to_string(), "foo/+/baz");
		assert_eq!(pattern.len(), 3);
	}

	#[test]
	fn test_wildcard_queries() {
		assert!(create_pattern("foo/#").contains_hash());
		assert!(!create_pattern("foo/+").contains_hash());
		assert!(create_pattern("foo/+").has_wildcards());
		assert!(!create_pattern("foo/bar").has_wildcards());
	}

	#[test]
	fn test_try_from_str() {
		let pattern: TopicPatternPath = "sensors/#".try_into().unwrap();
		assert!(pattern.matches("sensors/garage/temp"));
	}
}
