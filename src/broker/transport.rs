//! Clear-retained transport seam over the MQTT client

use std::future::Future;

use rumqttc::{AsyncClient, ClientError, QoS};
use thiserror::Error;
use tracing::debug;

/// Errors surfaced by the retained-message transport
#[derive(Error, Debug)]
pub enum TransportError {
	/// Publish failed in the underlying MQTT client
	#[error("Client operation failed: {0}")]
	Client(#[from] ClientError),

	/// Broker unreachable or connection lost.
	///
	/// Not produced by [`MqttRetainedStore`] (rumqttc reports its own
	/// failures through [`TransportError::Client`]); this variant is the
	/// free-form detail slot for other [`RetainedMessageStore`]
	/// implementations.
	#[error("Broker unavailable: {0}")]
	Unavailable(String),
}

impl TransportError {
	/// Creates a new Unavailable error
	pub fn unavailable(details: impl Into<String>) -> Self {
		Self::Unavailable(details.into())
	}
}

/// Transport capable of clearing a retained message for one exact topic.
///
/// Clearing is the standard MQTT idiom: publish an empty payload with the
/// retain flag set, which instructs the broker to drop its stored message.
/// The call is the only suspension point of a purge worker; implementations
/// must tolerate concurrent calls up to the engine's configured parallelism
/// (serialize externally by configuring parallelism 1 otherwise).
pub trait RetainedMessageStore: Send + Sync {
	/// Clears the retained message for `topic`.
	fn clear_retained(
		&self,
		topic: &str,
	) -> impl Future<Output = Result<(), TransportError>> + Send;
}

/// [`RetainedMessageStore`] backed by a `rumqttc::AsyncClient`.
#[derive(Debug, Clone)]
pub struct MqttRetainedStore {
	client: AsyncClient,
	qos: QoS,
}

impl MqttRetainedStore {
	/// Wraps an MQTT client, clearing at QoS 1 (AtLeastOnce) by default.
	pub fn new(client: AsyncClient) -> Self {
		Self {
			client,
			qos: QoS::AtLeastOnce,
		}
	}

	/// Sets Quality of Service level for clear publishes.
	pub fn with_qos(mut self, qos: QoS) -> Self {
		self.qos = qos;
		self
	}

	/// Get qos level used for clear publishes.
	pub fn qos(&self) -> QoS {
		self.qos
	}
}

impl RetainedMessageStore for MqttRetainedStore {
	async fn clear_retained(&self, topic: &str) -> Result<(), TransportError> {
		debug!(topic = %topic, "Clearing retained message");
		self.client
			.publish(topic, self.qos, true, Vec::new())
			.await
			.map_err(TransportError::from)
	}
}

impl<S: RetainedMessageStore> RetainedMessageStore for std::sync::Arc<S> {
	fn clear_retained(
		&self,
		topic: &str,
	) -> impl Future<Output = Result<(), TransportError>> + Send {
		self.as_ref().clear_retained(topic)
	}
}

impl<S: RetainedMessageStore> RetainedMessageStore for &S {
	fn clear_retained(
		&self,
		topic: &str,
	) -> impl Future<Output = Result<(), TransportError>> + Send {
		(*self).clear_retained(topic)
	}
}
