use thiserror::Error;

use crate::application::services::TokenError;
use crate::domain::repositories::RepositoryError;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Email already exists")]
    EmailTaken,
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error(transparent)]
    Token(#[from] TokenError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
