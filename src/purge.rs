//! Retained-message purge pipeline
//!
//! Resolver, limit guard, bounded executor and result aggregation behind
//! the [`RetainedPurger`] entry point.

pub mod command;
/// The engine entry point
pub mod engine;
pub mod executor;
pub mod guard;
pub mod resolver;
/// Status, per-topic outcomes and aggregation
pub mod result;

#[cfg(test)]
mod test_support;

// Re-export commonly used types for convenience
pub use command::{PurgeCommand, PurgeSettings};
pub use engine::RetainedPurger;
pub use guard::LimitVerdict;
pub use resolver::TopicMatchSet;
pub use result::{ClearError, PurgeResult, PurgeStatus, TopicOutcome};
