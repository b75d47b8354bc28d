use std::sync::Arc;
use validator::Validate;

use super::{
    contact_dto::SendInviteRequest,
    contact_models::contact_ids_for,
    contact_repository::ContactStore,
};
use crate::{
    error::{AppError, Result},
    notification::{notification_models::NewNotification, notification_service::NotificationService},
    user::{user_models::User, user_service::UserService},
};

#[derive(Clone)]
pub struct ContactService {
    repo: Arc<dyn ContactStore>,
    users: UserService,
    notifications: NotificationService,
}

impl ContactService {
    pub fn new(
        repo: Arc<dyn ContactStore>,
        users: UserService,
        notifications: NotificationService,
    ) -> Self {
        Self {
            repo,
            users,
            notifications,
        }
    }

    /// Records an invite notification from sender to target and broadcasts
    /// the refreshed notification list.
    pub async fn send_invite(&self, request: SendInviteRequest) -> Result<bool> {
        if request.sender_id == request.target_id {
            return Err(AppError::SameUserInvite);
        }
        request.validate()?;

        self.users.require(request.sender_id).await?;
        self.users.require(request.target_id).await?;

        if self
            .repo
            .find_between(request.sender_id, request.target_id)
            .await?
            .is_some()
        {
            return Err(AppError::AlreadyContact);
        }

        let notification = self
            .notifications
            .create(NewNotification::invite(
                request.sender_id,
                request.target_id,
                request.content,
            ))
            .await?;

        tracing::info!(
            "User {} invited user {} (notification {})",
            request.sender_id,
            request.target_id,
            notification.id
        );

        self.notifications.broadcast_all().await?;

        Ok(true)
    }

    /// Turns a pending invite from `sender_id` into a contact of `user_id`.
    pub async fn accept_invite(&self, user_id: i32, sender_id: i32) -> Result<bool> {
        if user_id == sender_id {
            return Err(AppError::SameUserInvite);
        }

        if self.repo.find_between(user_id, sender_id).await?.is_some() {
            return Err(AppError::AlreadyContact);
        }

        self.notifications
            .find_invite(sender_id, user_id)
            .await?
            .ok_or(AppError::InviteNotFound)?;

        let (contact, consumed) = self.repo.create_from_invite(sender_id, user_id).await?;

        tracing::info!(
            "User {} accepted invite from user {} (contact {}, {} invites consumed)",
            user_id,
            sender_id,
            contact.id,
            consumed
        );

        self.notifications.broadcast_all().await?;

        Ok(true)
    }

    pub async fn get_contacts(&self, user_id: i32) -> Result<Vec<User>> {
        let rows = self.repo.find_by_user(user_id).await?;
        let ids = contact_ids_for(user_id, &rows);

        tracing::debug!("User {} has {} contacts", user_id, ids.len());

        self.users.find_many(&ids).await
    }

    pub async fn remove_contact(&self, user_id: i32, contact_id: i32) -> Result<bool> {
        let contact = self
            .repo
            .find_between(user_id, contact_id)
            .await?
            .ok_or(AppError::NoLongerContact)?;

        match self.repo.delete(contact.user_id, contact.contact_id).await {
            Ok(0) => Err(AppError::NoLongerContact),
            Ok(_) => {
                tracing::info!("User {} removed contact {}", user_id, contact_id);
                Ok(true)
            }
            Err(e) => {
                tracing::error!(
                    "Failed to remove contact {} for user {}: {:?}",
                    contact_id,
                    user_id,
                    e
                );
                Err(AppError::ContactRemoval)
            }
        }
    }
}
