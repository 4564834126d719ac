use async_trait::async_trait;
use diesel::prelude::*;

use crate::domain::entities::{ChatMessage, NewChatMessage};
use crate::domain::repositories::{MessageRepository, RepositoryError};
use crate::infrastructure::database::Database;
use crate::infrastructure::database::models::{MessageModel, NewMessageModel};
use crate::infrastructure::database::schema::messages;

pub struct SqliteMessageRepository {
    database: Database,
}

impl SqliteMessageRepository {
    pub fn new(database: Database) -> Self {
        Self { database }
    }
}

#[async_trait]
impl MessageRepository for SqliteMessageRepository {
    async fn save(&self, message: NewChatMessage) -> Result<(), RepositoryError> {
        let new_message = NewMessageModel::from(message);

        self.database
            .run(move |conn| {
                diesel::insert_into(messages::table)
                    .values(new_message)
                    .execute(conn)
                    .map(|_| ())
            })
            .await
    }

    async fn find_by_user(&self, user_id: i32) -> Result<Vec<ChatMessage>, RepositoryError> {
        let models = self
            .database
            .run(move |conn| {
                messages::table
                    .filter(messages::user_id.eq(user_id))
                    // id breaks ties between messages stored within the same tick
                    .order((messages::created_at.desc(), messages::id.desc()))
                    .select(MessageModel::as_select())
                    .load(conn)
            })
            .await?;

        Ok(models.into_iter().map(ChatMessage::from).collect())
    }
}
