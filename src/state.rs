use anyhow::Context;
use std::sync::Arc;

use crate::{
    contact::{contact_repository::ContactStore, contact_service::ContactService},
    notification::{
        notification_models::Notification, notification_repository::NotificationStore,
        notification_service::NotificationService,
    },
    pubsub::PubSub,
    user::{user_repository::UserStore, user_service::UserService},
};

#[derive(Clone)]
pub struct AppState {
    pub pubsub: PubSub<Vec<Notification>>,
    pub user_service: UserService,
    pub notification_service: NotificationService,
    pub contact_service: ContactService,
}

impl AppState {
    /// Wires services over the given stores. Production passes the Postgres
    /// repositories; tests pass in-memory ones.
    pub fn new(
        config: Arc<Config>,
        users: Arc<dyn UserStore>,
        contacts: Arc<dyn ContactStore>,
        notifications: Arc<dyn NotificationStore>,
    ) -> Self {
        let pubsub = PubSub::new(config.pubsub_capacity);

        let user_service = UserService::new(users);
        let notification_service = NotificationService::new(
            notifications,
            pubsub.clone(),
            config.notification_topic.clone(),
        );
        let contact_service = ContactService::new(
            contacts,
            user_service.clone(),
            notification_service.clone(),
        );

        Self {
            pubsub,
            user_service,
            notification_service,
            contact_service,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub database_max_connections: u32,
    pub notification_topic: String,
    pub pubsub_capacity: usize,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .context("PORT must be a number")?,
            database_max_connections: std::env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "5".to_string())
                .parse()
                .context("DATABASE_MAX_CONNECTIONS must be a number")?,
            notification_topic: std::env::var("NOTIFICATION_TOPIC")
                .unwrap_or_else(|_| "NOTIFICATION_ADDED".to_string()),
            pubsub_capacity: std::env::var("PUBSUB_CAPACITY")
                .unwrap_or_else(|_| "100".to_string())
                .parse()
                .context("PUBSUB_CAPACITY must be a number")?,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
