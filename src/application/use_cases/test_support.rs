//! In-memory repositories for use case tests.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::domain::entities::{
    ChatMessage, DocumentMatch, DocumentSummary, NewChatMessage, NewDocument, NewUser, User,
};
use crate::domain::repositories::{
    DocumentRepository, MessageRepository, RepositoryError, UserRepository,
};

#[derive(Default)]
pub struct InMemoryUsers {
    users: Mutex<Vec<User>>,
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn create(&self, user: NewUser) -> Result<i32, RepositoryError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email() == user.email) {
            return Err(RepositoryError::UniqueViolation("users.email".to_string()));
        }
        let id = users.len() as i32 + 1;
        users.push(User::new(id, user.email, user.name, user.password));
        Ok(id)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.email() == email).cloned())
    }
}

#[derive(Default)]
pub struct InMemoryMessages {
    messages: Mutex<Vec<ChatMessage>>,
}

#[async_trait]
impl MessageRepository for InMemoryMessages {
    async fn save(&self, message: NewChatMessage) -> Result<(), RepositoryError> {
        let mut messages = self.messages.lock().unwrap();
        let id = messages.len() as i32 + 1;
        messages.push(ChatMessage {
            id,
            user_id: message.user_id,
            message: message.message,
            response: message.response,
            created_at: message.created_at,
        });
        Ok(())
    }

    async fn find_by_user(&self, user_id: i32) -> Result<Vec<ChatMessage>, RepositoryError> {
        let messages = self.messages.lock().unwrap();
        let mut found: Vec<ChatMessage> = messages
            .iter()
            .filter(|m| m.user_id == user_id)
            .cloned()
            .collect();
        found.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        Ok(found)
    }
}

#[derive(Default)]
pub struct InMemoryDocuments {
    documents: Mutex<Vec<(i32, NewDocument)>>,
}

#[async_trait]
impl DocumentRepository for InMemoryDocuments {
    async fn save(&self, document: NewDocument) -> Result<(), RepositoryError> {
        let mut documents = self.documents.lock().unwrap();
        let id = documents.len() as i32 + 1;
        documents.push((id, document));
        Ok(())
    }

    async fn list_by_user(&self, user_id: i32) -> Result<Vec<DocumentSummary>, RepositoryError> {
        let documents = self.documents.lock().unwrap();
        Ok(documents
            .iter()
            .filter(|(_, d)| d.user_id == user_id)
            .map(|(id, d)| DocumentSummary {
                id: *id,
                filename: d.filename.clone(),
                created_at: d.created_at,
            })
            .collect())
    }

    async fn search(
        &self,
        user_id: i32,
        query: &str,
    ) -> Result<Vec<DocumentMatch>, RepositoryError> {
        let documents = self.documents.lock().unwrap();
        Ok(documents
            .iter()
            .filter(|(_, d)| d.user_id == user_id && d.content.contains(query))
            .map(|(_, d)| DocumentMatch {
                filename: d.filename.clone(),
                content: d.content.clone(),
            })
            .collect())
    }
}

/// Every call fails as if the database file were unreadable.
pub struct BrokenStore;

fn broken() -> RepositoryError {
    RepositoryError::Database("unable to open database file".to_string())
}

#[async_trait]
impl UserRepository for BrokenStore {
    async fn create(&self, _user: NewUser) -> Result<i32, RepositoryError> {
        Err(broken())
    }

    async fn find_by_email(&self, _email: &str) -> Result<Option<User>, RepositoryError> {
        Err(broken())
    }
}

#[async_trait]
impl MessageRepository for BrokenStore {
    async fn save(&self, _message: NewChatMessage) -> Result<(), RepositoryError> {
        Err(broken())
    }

    async fn find_by_user(&self, _user_id: i32) -> Result<Vec<ChatMessage>, RepositoryError> {
        Err(broken())
    }
}
