use std::sync::Arc;

use crate::domain::repositories::{DocumentRepository, RepositoryError};

#[derive(Debug, Clone)]
pub struct SearchDocumentsRequest {
    pub user_id: i32,
    pub query: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    pub filename: String,
    pub excerpt: String,
}

#[derive(Debug, Clone)]
pub struct SearchDocumentsResponse {
    pub query: String,
    pub results: Vec<SearchHit>,
}

pub struct SearchDocumentsUseCase {
    document_repository: Arc<dyn DocumentRepository>,
}

impl SearchDocumentsUseCase {
    pub fn new(document_repository: Arc<dyn DocumentRepository>) -> Self {
        Self {
            document_repository,
        }
    }

    pub async fn execute(
        &self,
        request: SearchDocumentsRequest,
    ) -> Result<SearchDocumentsResponse, RepositoryError> {
        let matches = self
            .document_repository
            .search(request.user_id, &request.query)
            .await?;

        let results = matches
            .iter()
            .map(|m| SearchHit {
                filename: m.filename.clone(),
                excerpt: m.excerpt(),
            })
            .collect();

        Ok(SearchDocumentsResponse {
            query: request.query,
            results,
        })
    }
}
