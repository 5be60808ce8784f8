//! Broker collaborator interfaces
//!
//! The purge engine talks to the outside world through two narrow seams:
//! a point-in-time enumeration of topics known to hold retained messages
//! ([`TopicIndex`]) and the clear-retained publish operation
//! ([`RetainedMessageStore`]). Connection management, TLS and auth all live
//! with the host application.

pub mod topic_index;
/// Retained-message transport trait and rumqttc adapter
pub mod transport;

// Re-export commonly used types for convenience
pub use topic_index::{SharedTopicIndex, TopicIndex};
pub use transport::{MqttRetainedStore, RetainedMessageStore, TransportError};
