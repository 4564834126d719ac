use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::application::use_cases::send_chat_message::{ChatReply, SendChatMessageRequest};
use crate::domain::entities::ChatMessage;

#[derive(Debug, Deserialize)]
pub struct ChatRequestDto {
    pub message: String,
    pub user_id: i32,
}

#[derive(Debug, Serialize)]
pub struct ChatResponseDto {
    pub message: String,
    pub response: String,
    pub timestamp: NaiveDateTime,
}

#[derive(Debug, Serialize)]
pub struct MessageDto {
    pub message: String,
    pub response: String,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Serialize)]
pub struct MessageListResponseDto {
    pub messages: Vec<MessageDto>,
}

impl From<ChatRequestDto> for SendChatMessageRequest {
    fn from(dto: ChatRequestDto) -> Self {
        Self {
            user_id: dto.user_id,
            message: dto.message,
        }
    }
}

impl From<ChatReply> for ChatResponseDto {
    fn from(reply: ChatReply) -> Self {
        Self {
            message: reply.message,
            response: reply.response,
            timestamp: reply.timestamp,
        }
    }
}

impl From<ChatMessage> for MessageDto {
    fn from(message: ChatMessage) -> Self {
        Self {
            message: message.message,
            response: message.response,
            created_at: message.created_at,
        }
    }
}
