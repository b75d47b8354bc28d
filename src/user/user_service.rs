use std::sync::Arc;

use super::{user_models::User, user_repository::UserStore};
use crate::error::{AppError, Result};

#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UserStore>,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserStore>) -> Self {
        Self { repo }
    }

    pub async fn find(&self, user_id: i32) -> Result<Option<User>> {
        self.repo.find_by_id(user_id).await
    }

    pub async fn find_many(&self, ids: &[i32]) -> Result<Vec<User>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        self.repo.find_by_ids(ids).await
    }

    /// Like [`UserService::find`] but a missing user is an error.
    pub async fn require(&self, user_id: i32) -> Result<User> {
        self.repo
            .find_by_id(user_id)
            .await?
            .ok_or(AppError::UserNotFound(user_id))
    }
}
