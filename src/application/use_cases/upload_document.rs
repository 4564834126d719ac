use chrono::Utc;
use std::sync::Arc;

use crate::domain::entities::NewDocument;
use crate::domain::repositories::{DocumentRepository, RepositoryError};

#[derive(Debug, Clone)]
pub struct UploadDocumentRequest {
    pub user_id: i32,
    pub filename: String,
    pub content: String,
}

pub struct UploadDocumentUseCase {
    document_repository: Arc<dyn DocumentRepository>,
}

impl UploadDocumentUseCase {
    pub fn new(document_repository: Arc<dyn DocumentRepository>) -> Self {
        Self {
            document_repository,
        }
    }

    /// Stores the document and hands back its filename.
    pub async fn execute(&self, request: UploadDocumentRequest) -> Result<String, RepositoryError> {
        let filename = request.filename.clone();

        self.document_repository
            .save(NewDocument {
                user_id: request.user_id,
                filename: request.filename,
                content: request.content,
                created_at: Utc::now().naive_utc(),
            })
            .await?;

        tracing::debug!("Stored document {} for user {}", filename, request.user_id);
        Ok(filename)
    }
}
