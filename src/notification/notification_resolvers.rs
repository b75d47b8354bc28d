use async_graphql::{Context, ErrorExtensions, Object, Result, Subscription};
use futures::stream::Stream;

use super::notification_models::Notification;
use crate::state::AppState;

#[derive(Default)]
pub struct NotificationQuery;

#[Object]
impl NotificationQuery {
    /// Every notification, oldest first.
    async fn notifications(&self, ctx: &Context<'_>) -> Result<Vec<Notification>> {
        let state = ctx.data::<AppState>()?;
        state.notification_service.list_all().await.map_err(|e| e.extend())
    }

    /// Notifications addressed to the given user, oldest first.
    async fn notifications_for(&self, ctx: &Context<'_>, target_id: i32) -> Result<Vec<Notification>> {
        let state = ctx.data::<AppState>()?;
        state
            .notification_service
            .list_for_target(target_id)
            .await
            .map_err(|e| e.extend())
    }
}

#[derive(Default)]
pub struct NotificationSubscription;

#[Subscription]
impl NotificationSubscription {
    /// Emits the full notification list whenever it changes.
    async fn notification_added(
        &self,
        ctx: &Context<'_>,
    ) -> Result<impl Stream<Item = Vec<Notification>>> {
        let state = ctx.data::<AppState>()?;
        let topic = state.notification_service.topic();

        tracing::debug!("New subscriber on {}", topic);
        Ok(state.pubsub.subscribe(topic))
    }
}
