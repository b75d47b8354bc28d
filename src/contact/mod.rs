pub mod contact_dto;
pub mod contact_models;
pub mod contact_repository;
pub mod contact_resolvers;
pub mod contact_service;

pub use contact_models::Contact;
pub use contact_repository::{ContactRepository, ContactStore};
pub use contact_resolvers::{ContactMutation, ContactQuery};
pub use contact_service::ContactService;
