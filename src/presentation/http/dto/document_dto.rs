use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::application::use_cases::upload_document::UploadDocumentRequest;
use crate::domain::entities::DocumentSummary;

/// Upload inputs arrive as query parameters.
#[derive(Debug, Deserialize)]
pub struct UploadDocumentParams {
    pub user_id: i32,
    pub filename: String,
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct UploadResponseDto {
    pub status: String,
    pub filename: String,
}

#[derive(Debug, Serialize)]
pub struct DocumentDto {
    pub id: i32,
    pub filename: String,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Serialize)]
pub struct DocumentListResponseDto {
    pub documents: Vec<DocumentDto>,
}

impl From<UploadDocumentParams> for UploadDocumentRequest {
    fn from(params: UploadDocumentParams) -> Self {
        Self {
            user_id: params.user_id,
            filename: params.filename,
            content: params.content,
        }
    }
}

impl From<DocumentSummary> for DocumentDto {
    fn from(summary: DocumentSummary) -> Self {
        Self {
            id: summary.id,
            filename: summary.filename,
            created_at: summary.created_at,
        }
    }
}
