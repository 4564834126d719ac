use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::entities::{ChatMessage, NewChatMessage};
use crate::infrastructure::database::schema::messages;

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = messages)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct MessageModel {
    pub id: i32,
    pub user_id: i32,
    pub message: String,
    pub response: String,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = messages)]
pub struct NewMessageModel {
    pub user_id: i32,
    pub message: String,
    pub response: String,
    pub created_at: NaiveDateTime,
}

impl From<NewChatMessage> for NewMessageModel {
    fn from(message: NewChatMessage) -> Self {
        Self {
            user_id: message.user_id,
            message: message.message,
            response: message.response,
            created_at: message.created_at,
        }
    }
}

impl From<MessageModel> for ChatMessage {
    fn from(model: MessageModel) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            message: model.message,
            response: model.response,
            created_at: model.created_at,
        }
    }
}
