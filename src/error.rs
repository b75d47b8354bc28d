use async_graphql::ErrorExtensions;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("You can't send an invite to yourself")]
    SameUserInvite,

    #[error("This user already is your contact, please refresh page")]
    AlreadyContact,

    #[error("This user is no longer your contact")]
    NoLongerContact,

    #[error("Something went wrong while processing removal request")]
    ContactRemoval,

    #[error("User not found: {0}")]
    UserNotFound(i32),

    #[error("Invite not found")]
    InviteNotFound,

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl AppError {
    /// Machine-readable code exposed under `extensions.code`.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Database(_) => "INTERNAL_SERVER_ERROR",
            AppError::SameUserInvite => "INVITATION_SAME_USER_ERROR",
            AppError::AlreadyContact => "ALREADY_CONTACT",
            AppError::NoLongerContact => "NO_LONGER_CONTACT",
            AppError::ContactRemoval => "CONTACT_REMOVAL_ERROR",
            AppError::UserNotFound(_) => "USER_NOT_FOUND",
            AppError::InviteNotFound => "INVITE_NOT_FOUND",
            AppError::Validation(_) => "BAD_USER_INPUT",
        }
    }

    fn public_message(&self) -> String {
        match self {
            AppError::Database(ref e) => {
                tracing::error!("Database error: {:?}", e);
                "Database error occurred".to_string()
            }
            other => other.to_string(),
        }
    }
}

impl ErrorExtensions for AppError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.public_message())
            .extend_with(|_, e| e.set("code", self.code()))
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
