use async_graphql::{Context, ErrorExtensions, Object, Result};

use super::contact_dto::SendInviteRequest;
use crate::{state::AppState, user::user_models::User};

#[derive(Default)]
pub struct ContactQuery;

#[Object]
impl ContactQuery {
    /// Everyone the user is connected to, regardless of who sent the invite.
    async fn get_contacts(&self, ctx: &Context<'_>, user_id: i32) -> Result<Vec<User>> {
        let state = ctx.data::<AppState>()?;
        state
            .contact_service
            .get_contacts(user_id)
            .await
            .map_err(|e| e.extend())
    }
}

#[derive(Default)]
pub struct ContactMutation;

#[Object]
impl ContactMutation {
    async fn send_contact_invite(
        &self,
        ctx: &Context<'_>,
        sender_id: i32,
        target_id: i32,
        invite_content: String,
    ) -> Result<bool> {
        let state = ctx.data::<AppState>()?;
        let request = SendInviteRequest {
            sender_id,
            target_id,
            content: invite_content,
        };

        state
            .contact_service
            .send_invite(request)
            .await
            .map_err(|e| e.extend())
    }

    async fn accept_contact_invite(
        &self,
        ctx: &Context<'_>,
        user_id: i32,
        sender_id: i32,
    ) -> Result<bool> {
        let state = ctx.data::<AppState>()?;
        state
            .contact_service
            .accept_invite(user_id, sender_id)
            .await
            .map_err(|e| e.extend())
    }

    async fn remove_contact(&self, ctx: &Context<'_>, user_id: i32, contact_id: i32) -> Result<bool> {
        let state = ctx.data::<AppState>()?;
        state
            .contact_service
            .remove_contact(user_id, contact_id)
            .await
            .map_err(|e| e.extend())
    }
}
