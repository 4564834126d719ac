use serde::{Deserialize, Serialize};

use crate::application::use_cases::login::LoginRequest;
use crate::application::use_cases::signup::{AuthSession, SignupRequest};
use crate::domain::entities::UserProfile;

#[derive(Debug, Deserialize)]
pub struct SignupRequestDto {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequestDto {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponseDto {
    pub access_token: String,
    pub token_type: String,
    pub user: UserProfile,
}

impl From<SignupRequestDto> for SignupRequest {
    fn from(dto: SignupRequestDto) -> Self {
        Self {
            name: dto.name,
            email: dto.email,
            password: dto.password,
        }
    }
}

impl From<LoginRequestDto> for LoginRequest {
    fn from(dto: LoginRequestDto) -> Self {
        Self {
            email: dto.email,
            password: dto.password,
        }
    }
}

impl From<AuthSession> for AuthResponseDto {
    fn from(session: AuthSession) -> Self {
        Self {
            access_token: session.access_token,
            token_type: "bearer".to_string(),
            user: session.user,
        }
    }
}
