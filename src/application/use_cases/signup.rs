use chrono::Utc;
use std::sync::Arc;

use crate::application::errors::AuthError;
use crate::application::services::TokenService;
use crate::domain::entities::{NewUser, UserProfile};
use crate::domain::repositories::{RepositoryError, UserRepository};

#[derive(Debug, Clone)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// A freshly issued token and the user it was issued for.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub access_token: String,
    pub user: UserProfile,
}

pub struct SignupUseCase {
    user_repository: Arc<dyn UserRepository>,
    token_service: Arc<TokenService>,
}

impl SignupUseCase {
    pub fn new(user_repository: Arc<dyn UserRepository>, token_service: Arc<TokenService>) -> Self {
        Self {
            user_repository,
            token_service,
        }
    }

    pub async fn execute(&self, request: SignupRequest) -> Result<AuthSession, AuthError> {
        let new_user = NewUser {
            email: request.email.clone(),
            name: Some(request.name.clone()),
            password: request.password,
            created_at: Utc::now().naive_utc(),
        };

        let user_id = self
            .user_repository
            .create(new_user)
            .await
            .map_err(|e| match e {
                RepositoryError::UniqueViolation(_) => AuthError::EmailTaken,
                other => AuthError::Repository(other),
            })?;

        let access_token = self.token_service.issue(&request.email, user_id)?;
        tracing::info!("Registered user {}", user_id);

        Ok(AuthSession {
            access_token,
            user: UserProfile {
                id: user_id,
                email: request.email,
                name: Some(request.name),
            },
        })
    }
}
