use axum::async_trait;
use sqlx::{PgPool, Postgres, Transaction};

use super::notification_models::{NewNotification, Notification, NotificationType};
use crate::error::Result;

#[async_trait]
pub trait NotificationStore: Send + Sync {
    async fn create(&self, notification: NewNotification) -> Result<Notification>;

    async fn find_all(&self) -> Result<Vec<Notification>>;

    async fn find_by_target(&self, target_id: i32) -> Result<Vec<Notification>>;

    /// Oldest invite sent from `sender_id` to `target_id`.
    async fn find_invite(&self, sender_id: i32, target_id: i32) -> Result<Option<Notification>>;
}

#[derive(Clone)]
pub struct NotificationRepository {
    pool: PgPool,
}

impl NotificationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Deletes invites between the pair in either direction.
    pub async fn delete_invites_between_with_tx(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        a: i32,
        b: i32,
    ) -> Result<u64> {
        let result = sqlx::query(
            "DELETE FROM notifications
             WHERE type = $1
             AND ((sender_id = $2 AND target_id = $3) OR (sender_id = $3 AND target_id = $2))"
        )
        .bind(NotificationType::Invite)
        .bind(a)
        .bind(b)
        .execute(&mut **tx)
        .await?;

        Ok(result.rows_affected())
    }
}

#[async_trait]
impl NotificationStore for NotificationRepository {
    async fn create(&self, notification: NewNotification) -> Result<Notification> {
        let notification = sqlx::query_as::<_, Notification>(
            "INSERT INTO notifications (user_id, sender_id, target_id, content, type)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING *"
        )
        .bind(notification.user_id)
        .bind(notification.sender_id)
        .bind(notification.target_id)
        .bind(notification.content)
        .bind(notification.kind)
        .fetch_one(&self.pool)
        .await?;

        Ok(notification)
    }

    async fn find_all(&self) -> Result<Vec<Notification>> {
        let notifications = sqlx::query_as::<_, Notification>("SELECT * FROM notifications ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(notifications)
    }

    async fn find_by_target(&self, target_id: i32) -> Result<Vec<Notification>> {
        let notifications = sqlx::query_as::<_, Notification>(
            "SELECT * FROM notifications WHERE target_id = $1 ORDER BY id"
        )
        .bind(target_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(notifications)
    }

    async fn find_invite(&self, sender_id: i32, target_id: i32) -> Result<Option<Notification>> {
        let notification = sqlx::query_as::<_, Notification>(
            "SELECT * FROM notifications
             WHERE type = $1 AND sender_id = $2 AND target_id = $3
             ORDER BY id
             LIMIT 1"
        )
        .bind(NotificationType::Invite)
        .bind(sender_id)
        .bind(target_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(notification)
    }
}
