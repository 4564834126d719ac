use async_trait::async_trait;

use crate::domain::entities::{DocumentMatch, DocumentSummary, NewDocument};
use crate::domain::repositories::RepositoryError;

#[async_trait]
pub trait DocumentRepository: Send + Sync {
    async fn save(&self, document: NewDocument) -> Result<(), RepositoryError>;
    async fn list_by_user(&self, user_id: i32) -> Result<Vec<DocumentSummary>, RepositoryError>;
    /// Case-sensitive substring match on document content.
    async fn search(
        &self,
        user_id: i32,
        query: &str,
    ) -> Result<Vec<DocumentMatch>, RepositoryError>;
}
