use async_trait::async_trait;

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::RepositoryError;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts the user and returns the id it was assigned. Fails with
    /// `RepositoryError::UniqueViolation` when the email is taken.
    async fn create(&self, user: NewUser) -> Result<i32, RepositoryError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;
}
