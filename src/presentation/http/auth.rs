use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};
use std::convert::Infallible;
use std::sync::Arc;

use crate::application::{TokenClaims, TokenService};
use crate::presentation::http::errors::ApiError;

/// Bearer-token check in front of the data routes. When disabled every
/// request passes through untouched.
pub struct AuthGate {
    token_service: Arc<TokenService>,
    enabled: bool,
}

impl AuthGate {
    pub fn new(token_service: Arc<TokenService>, enabled: bool) -> Self {
        Self {
            token_service,
            enabled,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

pub async fn require_bearer(
    State(gate): State<Arc<AuthGate>>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if !gate.enabled {
        return Ok(next.run(request).await);
    }

    let claims = {
        let token = bearer_token(request.headers())
            .ok_or_else(|| ApiError::Unauthorized("Missing bearer token".to_string()))?;
        gate.token_service.verify(token)?
    };

    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let header = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = header.split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("Bearer") {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

/// Claims of the verified caller, if the gate put any on the request.
#[derive(Debug, Clone)]
pub struct Caller(pub Option<TokenClaims>);

impl Caller {
    /// A verified caller may only touch its own data.
    pub fn authorize(&self, user_id: i32) -> Result<(), ApiError> {
        match &self.0 {
            Some(claims) if claims.user_id != user_id => Err(ApiError::Forbidden(
                "Not allowed to access another user's data".to_string(),
            )),
            _ => Ok(()),
        }
    }
}

impl<S> FromRequestParts<S> for Caller
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Caller(parts.extensions.get::<TokenClaims>().cloned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_bearer_token_parsing() {
        assert_eq!(bearer_token(&headers("Bearer abc.def")), Some("abc.def"));
        assert_eq!(bearer_token(&headers("bearer abc")), Some("abc"));
        assert_eq!(bearer_token(&headers("Basic abc")), None);
        assert_eq!(bearer_token(&headers("Bearer ")), None);
        assert_eq!(bearer_token(&headers("Bearer")), None);
        assert_eq!(bearer_token(&HeaderMap::new()), None);
    }

    #[test]
    fn test_caller_authorization() {
        let claims = TokenClaims {
            email: "alice@x.com".to_string(),
            user_id: 1,
            iat: 0,
            exp: 0,
            jti: "x".to_string(),
        };

        assert!(Caller(None).authorize(7).is_ok());
        assert!(Caller(Some(claims.clone())).authorize(1).is_ok());
        assert!(matches!(
            Caller(Some(claims)).authorize(2),
            Err(ApiError::Forbidden(_))
        ));
    }
}
