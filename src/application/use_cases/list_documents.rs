use std::sync::Arc;

use crate::domain::entities::DocumentSummary;
use crate::domain::repositories::{DocumentRepository, RepositoryError};

pub struct ListDocumentsUseCase {
    document_repository: Arc<dyn DocumentRepository>,
}

impl ListDocumentsUseCase {
    pub fn new(document_repository: Arc<dyn DocumentRepository>) -> Self {
        Self {
            document_repository,
        }
    }

    pub async fn execute(&self, user_id: i32) -> Result<Vec<DocumentSummary>, RepositoryError> {
        self.document_repository.list_by_user(user_id).await
    }
}
