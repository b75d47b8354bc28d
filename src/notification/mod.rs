pub mod notification_models;
pub mod notification_repository;
pub mod notification_resolvers;
pub mod notification_service;

pub use notification_models::{NewNotification, Notification, NotificationType};
pub use notification_repository::{NotificationRepository, NotificationStore};
pub use notification_resolvers::{NotificationQuery, NotificationSubscription};
pub use notification_service::NotificationService;
