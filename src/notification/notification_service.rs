use std::sync::Arc;

use super::{
    notification_models::{NewNotification, Notification},
    notification_repository::NotificationStore,
};
use crate::{error::Result, pubsub::PubSub};

#[derive(Clone)]
pub struct NotificationService {
    repo: Arc<dyn NotificationStore>,
    pubsub: PubSub<Vec<Notification>>,
    topic: String,
}

impl NotificationService {
    pub fn new(
        repo: Arc<dyn NotificationStore>,
        pubsub: PubSub<Vec<Notification>>,
        topic: String,
    ) -> Self {
        Self { repo, pubsub, topic }
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub async fn create(&self, notification: NewNotification) -> Result<Notification> {
        self.repo.create(notification).await
    }

    pub async fn list_all(&self) -> Result<Vec<Notification>> {
        self.repo.find_all().await
    }

    pub async fn list_for_target(&self, target_id: i32) -> Result<Vec<Notification>> {
        self.repo.find_by_target(target_id).await
    }

    pub async fn find_invite(&self, sender_id: i32, target_id: i32) -> Result<Option<Notification>> {
        self.repo.find_invite(sender_id, target_id).await
    }

    /// Reloads every notification and publishes the full list on the topic.
    pub async fn broadcast_all(&self) -> Result<usize> {
        let notifications = self.repo.find_all().await?;
        let count = notifications.len();
        let receivers = self.pubsub.publish(&self.topic, notifications);

        tracing::info!(
            "Broadcast {} notifications on {} to {} subscribers",
            count,
            self.topic,
            receivers
        );

        Ok(receivers)
    }
}
