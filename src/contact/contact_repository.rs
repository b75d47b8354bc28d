use axum::async_trait;
use sqlx::{PgPool, Postgres, Transaction};

use super::contact_models::Contact;
use crate::{
    error::{AppError, Result},
    notification::notification_repository::NotificationRepository,
};

#[async_trait]
pub trait ContactStore: Send + Sync {
    /// The row linking `a` and `b`, whichever order it was stored in.
    async fn find_between(&self, a: i32, b: i32) -> Result<Option<Contact>>;

    /// Every row where the user appears on either side.
    async fn find_by_user(&self, user_id: i32) -> Result<Vec<Contact>>;

    /// Atomically stores the pair `(sender_id, target_id)` and deletes the
    /// invites between them. Nothing is written if either step fails; an
    /// existing pair fails with [`AppError::AlreadyContact`].
    async fn create_from_invite(&self, sender_id: i32, target_id: i32) -> Result<(Contact, u64)>;

    /// Deletes the row stored exactly as `(user_id, contact_id)`.
    async fn delete(&self, user_id: i32, contact_id: i32) -> Result<u64>;
}

#[derive(Clone)]
pub struct ContactRepository {
    pool: PgPool,
    notifications: NotificationRepository,
}

impl ContactRepository {
    pub fn new(pool: PgPool) -> Self {
        Self {
            notifications: NotificationRepository::new(pool.clone()),
            pool,
        }
    }

    pub async fn create_with_tx(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user_id: i32,
        contact_id: i32,
    ) -> Result<Contact> {
        let result = sqlx::query_as::<_, Contact>(
            "INSERT INTO contacts (user_id, contact_id) VALUES ($1, $2) RETURNING *"
        )
        .bind(user_id)
        .bind(contact_id)
        .fetch_one(&mut **tx)
        .await;

        match result {
            Ok(contact) => Ok(contact),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => Err(AppError::AlreadyContact),
            Err(e) => Err(e.into()),
        }
    }
}

#[async_trait]
impl ContactStore for ContactRepository {
    async fn find_between(&self, a: i32, b: i32) -> Result<Option<Contact>> {
        let contact = sqlx::query_as::<_, Contact>(
            "SELECT * FROM contacts
             WHERE (user_id = $1 AND contact_id = $2) OR (user_id = $2 AND contact_id = $1)
             LIMIT 1"
        )
        .bind(a)
        .bind(b)
        .fetch_optional(&self.pool)
        .await?;

        Ok(contact)
    }

    async fn find_by_user(&self, user_id: i32) -> Result<Vec<Contact>> {
        let contacts = sqlx::query_as::<_, Contact>(
            "SELECT * FROM contacts WHERE user_id = $1 OR contact_id = $1 ORDER BY id"
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(contacts)
    }

    async fn create_from_invite(&self, sender_id: i32, target_id: i32) -> Result<(Contact, u64)> {
        let mut tx = self.pool.begin().await?;

        // Invites go first so a conflicting insert also rolls them back
        let consumed = self
            .notifications
            .delete_invites_between_with_tx(&mut tx, sender_id, target_id)
            .await?;
        let contact = self.create_with_tx(&mut tx, sender_id, target_id).await?;

        tx.commit().await?;

        Ok((contact, consumed))
    }

    async fn delete(&self, user_id: i32, contact_id: i32) -> Result<u64> {
        let result = sqlx::query("DELETE FROM contacts WHERE user_id = $1 AND contact_id = $2")
            .bind(user_id)
            .bind(contact_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
