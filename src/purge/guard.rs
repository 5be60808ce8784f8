//! Fail-fast safety limit on affected topics

use tracing::warn;

use super::resolver::TopicMatchSet;

/// Verdict of the maximum-affected-topics check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LimitVerdict {
	/// Candidate count is within the limit; deletion may proceed
	Proceed,
	/// Candidate count exceeds the limit; no deletion must be attempted
	ExceedsLimit {
		/// Number of matched topics
		matched: usize,
		/// Configured limit
		limit: usize,
	},
}

/// Checks the candidate set against the safety limit.
///
/// This runs strictly before any broker mutation; an `ExceedsLimit` verdict
/// means zero clear operations were and will be issued for this command.
pub fn check_limit(candidates: &TopicMatchSet, limit: usize) -> LimitVerdict {
	let matched = candidates.len();
	if matched > limit {
		warn!(
			matched = matched,
			limit = limit,
			"Retained purge blocked by topic limit"
		);
		return LimitVerdict::ExceedsLimit { matched, limit };
	}
	LimitVerdict::Proceed
}

#[cfg(test)]
mod tests {
	use arcstr::ArcStr;

	use super::*;

	fn candidates(count: usize) -> TopicMatchSet {
		(0 .. count)
			.map(|i| ArcStr::from(format!("topic/{i:04}")))
			.collect()
	}

	#[test]
	fn test_within_limit_proceeds() {
		assert_eq!(check_limit(&candidates(500), 500), LimitVerdict::Proceed);
		assert_eq!(check_limit(&candidates(0), 500), LimitVerdict::Proceed);
	}

	#[test]
	fn test_over_limit_blocks() {
		assert_eq!(
			check_limit(&candidates(501), 500),
			LimitVerdict::ExceedsLimit {
				matched: 501,
				limit: 500
			}
		);
	}
}
