//! Topic handling module
//!
//! This module provides components for working with MQTT topic patterns:
//! parsing, wildcard validation, and matching patterns against concrete
//! topic strings.

// Submodules
pub mod topic_pattern_item;
/// Topic pattern parsing and matching
pub mod topic_pattern_path;

#[cfg(test)]
mod topic_pattern_path_tests;

// Re-export commonly used types for convenience
pub use topic_pattern_item::{TopicPatternError, TopicPatternItem};
pub use topic_pattern_path::TopicPatternPath;

/// Convenient Result type for pattern operations
pub type PatternResult<T> = Result<T, TopicPatternError>;
