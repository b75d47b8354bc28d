use contacts_api::{
    build_schema,
    contact::ContactRepository,
    db::{create_pool, run_migrations},
    notification::NotificationRepository,
    routes::create_router,
    user::UserRepository,
    AppState, Config,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,contacts_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Arc::new(Config::from_env()?);

    tracing::info!("Connecting to database...");
    let db = create_pool(&config.database_url, config.database_max_connections).await?;

    tracing::info!("Running migrations...");
    run_migrations(&db).await?;

    let state = AppState::new(
        config.clone(),
        Arc::new(UserRepository::new(db.clone())),
        Arc::new(ContactRepository::new(db.clone())),
        Arc::new(NotificationRepository::new(db)),
    );

    let schema = build_schema(state);
    let app = create_router(schema);

    let addr = config.server_address();
    tracing::info!("Server starting on http://{}", addr);
    tracing::info!("GraphiQL available at http://{}/graphql", addr);
    tracing::info!("Subscriptions on {} via ws://{}/ws", config.notification_topic, addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
