use chrono::{DateTime, Utc};
use sqlx::FromRow;
use std::collections::HashSet;

/// One side of a bidirectional relationship. The pair is unordered: a row
/// `(a, b)` means the same thing as `(b, a)` and only one of them may exist.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Contact {
    pub id: i32,
    pub user_id: i32,
    pub contact_id: i32,
    pub created_at: DateTime<Utc>,
}

impl Contact {
    pub fn involves(&self, user_id: i32) -> bool {
        self.user_id == user_id || self.contact_id == user_id
    }

    pub fn connects(&self, a: i32, b: i32) -> bool {
        (self.user_id == a && self.contact_id == b) || (self.user_id == b && self.contact_id == a)
    }

    /// The id on the opposite side from `user_id`.
    pub fn other_side(&self, user_id: i32) -> i32 {
        if self.user_id == user_id {
            self.contact_id
        } else {
            self.user_id
        }
    }
}

/// Ids of everyone `user_id` is connected to, in first-seen order.
///
/// Rows not involving the user, rows pairing the user with themself and
/// repeated pairs stored in either order are dropped.
pub fn contact_ids_for(user_id: i32, contacts: &[Contact]) -> Vec<i32> {
    let mut seen = HashSet::new();

    contacts
        .iter()
        .filter(|contact| contact.involves(user_id))
        .map(|contact| contact.other_side(user_id))
        .filter(|id| *id != user_id && seen.insert(*id))
        .collect()
}
