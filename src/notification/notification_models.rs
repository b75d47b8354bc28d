use async_graphql::{Enum, SimpleObject};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::Type, Enum)]
#[sqlx(type_name = "notification_type", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationType {
    #[default]
    Notification,
    Invite,
}

impl std::fmt::Display for NotificationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotificationType::Notification => write!(f, "NOTIFICATION"),
            NotificationType::Invite => write!(f, "INVITE"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, SimpleObject)]
pub struct Notification {
    pub id: i32,
    pub user_id: Option<i32>,
    pub sender_id: Option<i32>,
    pub target_id: Option<i32>,
    pub content: Option<String>,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    #[graphql(name = "type")]
    pub kind: NotificationType,
    pub created_at: DateTime<Utc>,
}

/// Column values for an insert; id and timestamp come from the database.
#[derive(Debug, Clone, Default)]
pub struct NewNotification {
    pub user_id: Option<i32>,
    pub sender_id: Option<i32>,
    pub target_id: Option<i32>,
    pub content: Option<String>,
    pub kind: NotificationType,
}

impl NewNotification {
    pub fn invite(sender_id: i32, target_id: i32, content: String) -> Self {
        Self {
            user_id: None,
            sender_id: Some(sender_id),
            target_id: Some(target_id),
            content: Some(content),
            kind: NotificationType::Invite,
        }
    }
}
