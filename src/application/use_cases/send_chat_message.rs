use chrono::{NaiveDateTime, Utc};
use std::sync::Arc;

use crate::domain::entities::NewChatMessage;
use crate::domain::repositories::{MessageRepository, RepositoryError};

#[derive(Debug, Clone)]
pub struct SendChatMessageRequest {
    pub user_id: i32,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct ChatReply {
    pub message: String,
    pub response: String,
    pub timestamp: NaiveDateTime,
}

pub struct SendChatMessageUseCase {
    message_repository: Arc<dyn MessageRepository>,
}

impl SendChatMessageUseCase {
    pub fn new(message_repository: Arc<dyn MessageRepository>) -> Self {
        Self { message_repository }
    }

    pub async fn execute(&self, request: SendChatMessageRequest) -> Result<ChatReply, RepositoryError> {
        let now = Utc::now().naive_utc();
        let new_message = NewChatMessage::with_reply(request.user_id, request.message, now);

        let reply = ChatReply {
            message: new_message.message.clone(),
            response: new_message.response.clone(),
            timestamp: now,
        };

        self.message_repository.save(new_message).await?;

        Ok(reply)
    }
}
