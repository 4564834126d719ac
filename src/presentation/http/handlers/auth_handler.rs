use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use std::sync::Arc;

use crate::application::use_cases::{LoginUseCase, SignupUseCase};
use crate::presentation::http::dto::{AuthResponseDto, LoginRequestDto, SignupRequestDto};
use crate::presentation::http::errors::ApiError;

pub struct AuthHandler {
    signup_use_case: Arc<SignupUseCase>,
    login_use_case: Arc<LoginUseCase>,
}

impl AuthHandler {
    pub fn new(signup_use_case: Arc<SignupUseCase>, login_use_case: Arc<LoginUseCase>) -> Self {
        Self {
            signup_use_case,
            login_use_case,
        }
    }

    pub async fn signup(
        State(handler): State<Arc<AuthHandler>>,
        Json(request): Json<SignupRequestDto>,
    ) -> Result<impl IntoResponse, ApiError> {
        let session = handler.signup_use_case.execute(request.into()).await?;
        Ok((StatusCode::OK, Json(AuthResponseDto::from(session))))
    }

    pub async fn login(
        State(handler): State<Arc<AuthHandler>>,
        Json(request): Json<LoginRequestDto>,
    ) -> Result<impl IntoResponse, ApiError> {
        let session = handler.login_use_case.execute(request.into()).await?;
        Ok((StatusCode::OK, Json(AuthResponseDto::from(session))))
    }
}
