use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use std::sync::Arc;

use crate::application::use_cases::SearchDocumentsUseCase;
use crate::presentation::http::auth::Caller;
use crate::presentation::http::dto::{SearchParams, SearchResponseDto};
use crate::presentation::http::errors::ApiError;

pub struct SearchHandler {
    search_use_case: Arc<SearchDocumentsUseCase>,
}

impl SearchHandler {
    pub fn new(search_use_case: Arc<SearchDocumentsUseCase>) -> Self {
        Self { search_use_case }
    }

    pub async fn search_documents(
        State(handler): State<Arc<SearchHandler>>,
        caller: Caller,
        Query(params): Query<SearchParams>,
    ) -> Result<impl IntoResponse, ApiError> {
        caller.authorize(params.user_id)?;

        let response = handler.search_use_case.execute(params.into()).await?;
        Ok((StatusCode::OK, Json(SearchResponseDto::from(response))))
    }
}
