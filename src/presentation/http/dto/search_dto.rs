use serde::{Deserialize, Serialize};

use crate::application::use_cases::search_documents::{
    SearchDocumentsRequest, SearchDocumentsResponse, SearchHit,
};

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub user_id: i32,
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct SearchResponseDto {
    pub query: String,
    pub results: Vec<SearchResultDto>,
}

#[derive(Debug, Serialize)]
pub struct SearchResultDto {
    pub filename: String,
    pub excerpt: String,
}

impl From<SearchParams> for SearchDocumentsRequest {
    fn from(params: SearchParams) -> Self {
        Self {
            user_id: params.user_id,
            query: params.query,
        }
    }
}

impl From<SearchDocumentsResponse> for SearchResponseDto {
    fn from(response: SearchDocumentsResponse) -> Self {
        Self {
            query: response.query,
            results: response.results.into_iter().map(SearchResultDto::from).collect(),
        }
    }
}

impl From<SearchHit> for SearchResultDto {
    fn from(hit: SearchHit) -> Self {
        Self {
            filename: hit.filename,
            excerpt: hit.excerpt,
        }
    }
}
