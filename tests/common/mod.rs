//! In-memory stores and helpers shared by the integration tests.

#![allow(dead_code)]

use axum::async_trait;
use chrono::Utc;
use contacts_api::{
    build_schema,
    contact::{Contact, ContactStore},
    error::{AppError, Result},
    notification::{NewNotification, Notification, NotificationStore, NotificationType},
    user::{User, UserStore},
    AppSchema, AppState, Config,
};
use serde_json::Value;
use std::sync::{
    atomic::{AtomicBool, AtomicI32, Ordering},
    Arc, Mutex,
};

pub const TEST_TOPIC: &str = "TEST_NOTIFICATION_ADDED";

pub fn test_config() -> Config {
    Config {
        database_url: String::new(),
        host: "127.0.0.1".to_string(),
        port: 0,
        database_max_connections: 1,
        notification_topic: TEST_TOPIC.to_string(),
        pubsub_capacity: 16,
    }
}

#[derive(Default)]
pub struct MemoryUsers {
    users: Mutex<Vec<User>>,
}

impl MemoryUsers {
    pub fn with_ids(ids: &[i32]) -> Self {
        let users = ids
            .iter()
            .map(|id| User {
                id: *id,
                username: format!("user{}", id),
                email: format!("user{}@example.com", id),
                created_at: Utc::now(),
            })
            .collect();

        Self {
            users: Mutex::new(users),
        }
    }
}

#[async_trait]
impl UserStore for MemoryUsers {
    async fn find_by_id(&self, user_id: i32) -> Result<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.id == user_id).cloned())
    }

    async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<User>> {
        let users = self.users.lock().unwrap();
        let mut found: Vec<User> = users.iter().filter(|u| ids.contains(&u.id)).cloned().collect();
        found.sort_by_key(|u| u.id);
        Ok(found)
    }
}

/// Contacts linked to the notification store so accepting an invite can
/// consume it in the same step.
pub struct MemoryContacts {
    rows: Mutex<Vec<Contact>>,
    next_id: AtomicI32,
    fail_deletes: AtomicBool,
    notifications: Arc<MemoryNotifications>,
}

impl MemoryContacts {
    pub fn new(notifications: Arc<MemoryNotifications>) -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            next_id: AtomicI32::new(0),
            fail_deletes: AtomicBool::new(false),
            notifications,
        }
    }

    /// Stores a row as given, skipping the pair uniqueness check.
    pub fn insert_raw(&self, user_id: i32, contact_id: i32) -> Contact {
        let contact = Contact {
            id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            user_id,
            contact_id,
            created_at: Utc::now(),
        };
        self.rows.lock().unwrap().push(contact.clone());
        contact
    }

    pub fn fail_deletes(&self) {
        self.fail_deletes.store(true, Ordering::SeqCst);
    }

    pub fn rows(&self) -> Vec<Contact> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContactStore for MemoryContacts {
    async fn find_between(&self, a: i32, b: i32) -> Result<Option<Contact>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|c| c.connects(a, b)).cloned())
    }

    async fn find_by_user(&self, user_id: i32) -> Result<Vec<Contact>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().filter(|c| c.involves(user_id)).cloned().collect())
    }

    async fn create_from_invite(&self, sender_id: i32, target_id: i32) -> Result<(Contact, u64)> {
        if self.rows.lock().unwrap().iter().any(|c| c.connects(sender_id, target_id)) {
            return Err(AppError::AlreadyContact);
        }
        // Consume invites before inserting so a failure writes nothing
        let consumed = self.notifications.delete_invites_between(sender_id, target_id)?;
        Ok((self.insert_raw(sender_id, target_id), consumed))
    }

    async fn delete(&self, user_id: i32, contact_id: i32) -> Result<u64> {
        if self.fail_deletes.load(Ordering::SeqCst) {
            return Err(AppError::Database(sqlx::Error::Protocol(
                "connection reset".to_string(),
            )));
        }

        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|c| !(c.user_id == user_id && c.contact_id == contact_id));
        Ok((before - rows.len()) as u64)
    }
}

#[derive(Default)]
pub struct MemoryNotifications {
    rows: Mutex<Vec<Notification>>,
    next_id: AtomicI32,
    fail_invite_deletes: AtomicBool,
}

impl MemoryNotifications {
    pub fn rows(&self) -> Vec<Notification> {
        self.rows.lock().unwrap().clone()
    }

    pub fn fail_invite_deletes(&self, fail: bool) {
        self.fail_invite_deletes.store(fail, Ordering::SeqCst);
    }

    pub fn delete_invites_between(&self, a: i32, b: i32) -> Result<u64> {
        if self.fail_invite_deletes.load(Ordering::SeqCst) {
            return Err(AppError::Database(sqlx::Error::Protocol(
                "connection reset".to_string(),
            )));
        }

        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|n| {
            let between = (n.sender_id == Some(a) && n.target_id == Some(b))
                || (n.sender_id == Some(b) && n.target_id == Some(a));
            !(n.kind == NotificationType::Invite && between)
        });
        Ok((before - rows.len()) as u64)
    }
}

#[async_trait]
impl NotificationStore for MemoryNotifications {
    async fn create(&self, notification: NewNotification) -> Result<Notification> {
        let notification = Notification {
            id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            user_id: notification.user_id,
            sender_id: notification.sender_id,
            target_id: notification.target_id,
            content: notification.content,
            kind: notification.kind,
            created_at: Utc::now(),
        };
        self.rows.lock().unwrap().push(notification.clone());
        Ok(notification)
    }

    async fn find_all(&self) -> Result<Vec<Notification>> {
        Ok(self.rows())
    }

    async fn find_by_target(&self, target_id: i32) -> Result<Vec<Notification>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().filter(|n| n.target_id == Some(target_id)).cloned().collect())
    }

    async fn find_invite(&self, sender_id: i32, target_id: i32) -> Result<Option<Notification>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .find(|n| {
                n.kind == NotificationType::Invite
                    && n.sender_id == Some(sender_id)
                    && n.target_id == Some(target_id)
            })
            .cloned())
    }
}

pub struct TestApp {
    pub state: AppState,
    pub schema: AppSchema,
    pub users: Arc<MemoryUsers>,
    pub contacts: Arc<MemoryContacts>,
    pub notifications: Arc<MemoryNotifications>,
}

/// App with users 1 through 4 and no contacts or notifications.
pub fn test_app() -> TestApp {
    let users = Arc::new(MemoryUsers::with_ids(&[1, 2, 3, 4]));
    let notifications = Arc::new(MemoryNotifications::default());
    let contacts = Arc::new(MemoryContacts::new(notifications.clone()));

    let state = AppState::new(
        Arc::new(test_config()),
        users.clone(),
        contacts.clone(),
        notifications.clone(),
    );
    let schema = build_schema(state.clone());

    TestApp {
        state,
        schema,
        users,
        contacts,
        notifications,
    }
}

/// Runs a GraphQL document and returns the serialized response.
pub async fn execute(schema: &AppSchema, query: &str) -> Value {
    let response = schema.execute(query).await;
    serde_json::to_value(&response).expect("response should serialize")
}

pub fn error_code(response: &Value) -> Option<&str> {
    response["errors"][0]["extensions"]["code"].as_str()
}
