use async_trait::async_trait;

use crate::domain::entities::{ChatMessage, NewChatMessage};
use crate::domain::repositories::RepositoryError;

#[async_trait]
pub trait MessageRepository: Send + Sync {
    async fn save(&self, message: NewChatMessage) -> Result<(), RepositoryError>;
    /// Newest first.
    async fn find_by_user(&self, user_id: i32) -> Result<Vec<ChatMessage>, RepositoryError>;
}
