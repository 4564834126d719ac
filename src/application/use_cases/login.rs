use std::sync::Arc;

use crate::application::errors::AuthError;
use crate::application::services::TokenService;
use crate::application::use_cases::signup::AuthSession;
use crate::domain::repositories::UserRepository;

#[derive(Debug, Clone)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

pub struct LoginUseCase {
    user_repository: Arc<dyn UserRepository>,
    token_service: Arc<TokenService>,
}

impl LoginUseCase {
    pub fn new(user_repository: Arc<dyn UserRepository>, token_service: Arc<TokenService>) -> Self {
        Self {
            user_repository,
            token_service,
        }
    }

    pub async fn execute(&self, request: LoginRequest) -> Result<AuthSession, AuthError> {
        let user = self
            .user_repository
            .find_by_email(&request.email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !user.password_matches(&request.password) {
            tracing::debug!("Password mismatch for user {}", user.id());
            return Err(AuthError::InvalidCredentials);
        }

        let access_token = self.token_service.issue(user.email(), user.id())?;

        Ok(AuthSession {
            access_token,
            user: user.profile(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::signup::{SignupRequest, SignupUseCase};
    use crate::application::use_cases::test_support::{BrokenStore, InMemoryUsers};
    use chrono::Duration;

    async fn setup() -> (LoginUseCase, Arc<TokenService>, AuthSession) {
        let users = Arc::new(InMemoryUsers::default());
        let tokens = Arc::new(TokenService::new("test-secret", Duration::days(7)));

        let signup = SignupUseCase::new(users.clone(), tokens.clone());
        let session = signup
            .execute(SignupRequest {
                name: "Alice".to_string(),
                email: "alice@x.com".to_string(),
                password: "p1".to_string(),
            })
            .await
            .unwrap();

        (LoginUseCase::new(users, tokens.clone()), tokens, session)
    }

    fn login(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_login_with_correct_password() {
        let (use_case, tokens, signup_session) = setup().await;

        let session = use_case.execute(login("alice@x.com", "p1")).await.unwrap();
        let claims = tokens.verify(&session.access_token).unwrap();

        assert_ne!(session.access_token, signup_session.access_token);
        assert_eq!(session.user, signup_session.user);
        assert_eq!(claims.user_id, signup_session.user.id);
        assert_eq!(claims.email, "alice@x.com");
    }

    #[tokio::test]
    async fn test_login_rejects_wrong_password() {
        let (use_case, _, _) = setup().await;

        for candidate in ["wrong", "P1", "p1 ", ""] {
            let result = use_case.execute(login("alice@x.com", candidate)).await;
            assert!(matches!(result, Err(AuthError::InvalidCredentials)));
        }
    }

    #[tokio::test]
    async fn test_login_rejects_unknown_email() {
        let (use_case, _, _) = setup().await;

        let result = use_case.execute(login("ALICE@x.com", "p1")).await;
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_storage_failure_surfaces() {
        let tokens = Arc::new(TokenService::new("test-secret", Duration::days(7)));
        let use_case = LoginUseCase::new(Arc::new(BrokenStore), tokens);

        let result = use_case.execute(login("alice@x.com", "p1")).await;
        assert!(matches!(result, Err(AuthError::Repository(_))));
    }
}
