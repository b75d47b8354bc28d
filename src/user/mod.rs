pub mod user_models;
pub mod user_repository;
pub mod user_resolvers;
pub mod user_service;

pub use user_models::User;
pub use user_repository::{UserRepository, UserStore};
pub use user_resolvers::UserQuery;
pub use user_service::UserService;
