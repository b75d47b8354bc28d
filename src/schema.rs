use async_graphql::{MergedObject, MergedSubscription, Schema};

use crate::{
    contact::{ContactMutation, ContactQuery},
    notification::{NotificationQuery, NotificationSubscription},
    state::AppState,
    user::UserQuery,
};

#[derive(MergedObject, Default)]
pub struct QueryRoot(ContactQuery, NotificationQuery, UserQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(ContactMutation);

#[derive(MergedSubscription, Default)]
pub struct SubscriptionRoot(NotificationSubscription);

pub type AppSchema = Schema<QueryRoot, MutationRoot, SubscriptionRoot>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        SubscriptionRoot::default(),
    )
    .data(state)
    .finish()
}
