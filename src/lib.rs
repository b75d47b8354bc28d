pub mod contact;
pub mod db;
pub mod error;
pub mod notification;
pub mod pubsub;
pub mod routes;
pub mod schema;
pub mod state;
pub mod user;

pub use error::{AppError, Result};
pub use schema::{build_schema, AppSchema};
pub use state::{AppState, Config};
