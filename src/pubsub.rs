//! In-process publish/subscribe keyed by topic name.
//!
//! Each topic owns a `tokio::sync::broadcast` channel created on first use.
//! Publishing to a topic with no subscribers is not an error; the payload is
//! simply dropped.

use dashmap::DashMap;
use futures::stream::Stream;
use std::sync::Arc;
use tokio::sync::broadcast;
use tokio_stream::{wrappers::BroadcastStream, StreamExt};

#[derive(Clone)]
pub struct PubSub<T> {
    topics: Arc<DashMap<String, broadcast::Sender<T>>>,
    capacity: usize,
}

impl<T> PubSub<T>
where
    T: Clone + Send + 'static,
{
    pub fn new(capacity: usize) -> Self {
        Self {
            topics: Arc::new(DashMap::new()),
            capacity: capacity.max(1),
        }
    }

    fn sender(&self, topic: &str) -> broadcast::Sender<T> {
        self.topics
            .entry(topic.to_string())
            .or_insert_with(|| broadcast::channel(self.capacity).0)
            .clone()
    }

    /// Publish a payload, returning how many subscribers received it.
    pub fn publish(&self, topic: &str, payload: T) -> usize {
        match self.sender(topic).send(payload) {
            Ok(receivers) => {
                tracing::debug!("Published to {} ({} subscribers)", topic, receivers);
                receivers
            }
            Err(_) => {
                tracing::debug!("Published to {} with no subscribers", topic);
                0
            }
        }
    }

    /// Subscribe to a topic. Payloads missed by a lagging subscriber are skipped.
    pub fn subscribe(&self, topic: &str) -> impl Stream<Item = T> + Send + 'static {
        let topic_name = topic.to_string();
        BroadcastStream::new(self.sender(topic).subscribe()).filter_map(move |result| {
            match result {
                Ok(payload) => Some(payload),
                Err(e) => {
                    tracing::warn!("Subscriber on {} lagged: {}", topic_name, e);
                    None
                }
            }
        })
    }

    pub fn subscriber_count(&self, topic: &str) -> usize {
        self.topics
            .get(topic)
            .map(|sender| sender.receiver_count())
            .unwrap_or(0)
    }
}
