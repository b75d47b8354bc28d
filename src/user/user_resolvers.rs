use async_graphql::{Context, ErrorExtensions, Object, Result};

use super::user_models::User;
use crate::state::AppState;

#[derive(Default)]
pub struct UserQuery;

#[Object]
impl UserQuery {
    /// Look up a single user by id.
    async fn user(&self, ctx: &Context<'_>, id: i32) -> Result<Option<User>> {
        let state = ctx.data::<AppState>()?;
        state.user_service.find(id).await.map_err(|e| e.extend())
    }
}
