use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use std::sync::Arc;

use crate::application::use_cases::{ListDocumentsUseCase, UploadDocumentUseCase};
use crate::presentation::http::auth::Caller;
use crate::presentation::http::dto::{
    DocumentDto, DocumentListResponseDto, UploadDocumentParams, UploadResponseDto,
};
use crate::presentation::http::errors::ApiError;

pub struct DocumentHandler {
    upload_use_case: Arc<UploadDocumentUseCase>,
    list_documents_use_case: Arc<ListDocumentsUseCase>,
}

impl DocumentHandler {
    pub fn new(
        upload_use_case: Arc<UploadDocumentUseCase>,
        list_documents_use_case: Arc<ListDocumentsUseCase>,
    ) -> Self {
        Self {
            upload_use_case,
            list_documents_use_case,
        }
    }

    pub async fn upload_document(
        State(handler): State<Arc<DocumentHandler>>,
        caller: Caller,
        Query(params): Query<UploadDocumentParams>,
    ) -> Result<impl IntoResponse, ApiError> {
        caller.authorize(params.user_id)?;

        let filename = handler.upload_use_case.execute(params.into()).await?;
        let dto = UploadResponseDto {
            status: "success".to_string(),
            filename,
        };
        Ok((StatusCode::OK, Json(dto)))
    }

    pub async fn list_documents(
        State(handler): State<Arc<DocumentHandler>>,
        caller: Caller,
        Path(user_id): Path<i32>,
    ) -> Result<impl IntoResponse, ApiError> {
        caller.authorize(user_id)?;

        let documents = handler.list_documents_use_case.execute(user_id).await?;
        let dto = DocumentListResponseDto {
            documents: documents.into_iter().map(DocumentDto::from).collect(),
        };
        Ok((StatusCode::OK, Json(dto)))
    }
}
