use std::sync::Arc;

use crate::domain::entities::ChatMessage;
use crate::domain::repositories::{MessageRepository, RepositoryError};

pub struct ListMessagesUseCase {
    message_repository: Arc<dyn MessageRepository>,
}

impl ListMessagesUseCase {
    pub fn new(message_repository: Arc<dyn MessageRepository>) -> Self {
        Self { message_repository }
    }

    /// All messages of `user_id`, most recent first.
    pub async fn execute(&self, user_id: i32) -> Result<Vec<ChatMessage>, RepositoryError> {
        self.message_repository.find_by_user(user_id).await
    }
}
