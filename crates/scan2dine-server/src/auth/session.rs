use std::sync::Arc;

use axum::extract::{FromRef, FromRequestParts};
use axum::http::{header::AUTHORIZATION, request::Parts};
use uuid::Uuid;

use crate::auth::jwt::JwtManager;
use crate::utils::error::ApiError;

/// Authenticated owner identity, decoded from the bearer token.
///
/// Handlers that operate on owner data take this as an argument, so the
/// acting account is always explicit in the signature rather than read
/// from ambient state.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub account_id: Uuid,
    pub email: String,
}

impl<S> FromRequestParts<S> for AuthSession
where
    Arc<JwtManager>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jwt_manager = Arc::<JwtManager>::from_ref(state);

        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| ApiError::Unauthorized("Missing authorization header".to_string()))?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or_else(|| ApiError::Unauthorized("Expected a bearer token".to_string()))?;

        let claims = jwt_manager
            .validate_token(token)
            .map_err(|_| ApiError::Unauthorized("Invalid or expired token".to_string()))?;

        let account_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| ApiError::Unauthorized("Malformed token subject".to_string()))?;

        Ok(AuthSession {
            account_id,
            email: claims.email,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    #[derive(Clone)]
    struct TestState {
        jwt_manager: Arc<JwtManager>,
    }

    impl FromRef<TestState> for Arc<JwtManager> {
        fn from_ref(state: &TestState) -> Self {
            state.jwt_manager.clone()
        }
    }

    fn test_state() -> TestState {
        TestState {
            jwt_manager: Arc::new(JwtManager::new("session-test-secret", 3600)),
        }
    }

    async fn extract(state: &TestState, header: Option<&str>) -> Result<AuthSession, ApiError> {
        let mut builder = Request::builder().uri("/api/menu/items");
        if let Some(value) = header {
            builder = builder.header(AUTHORIZATION, value);
        }
        let (mut parts, _) = builder.body(()).unwrap().into_parts();
        AuthSession::from_request_parts(&mut parts, state).await
    }

    #[tokio::test]
    async fn valid_bearer_token_yields_session() {
        let state = test_state();
        let account_id = Uuid::new_v4();
        let token = state
            .jwt_manager
            .generate_token(&account_id, "owner@example.com")
            .unwrap();

        let session = extract(&state, Some(&format!("Bearer {}", token))).await.unwrap();
        assert_eq!(session.account_id, account_id);
        assert_eq!(session.email, "owner@example.com");
    }

    #[tokio::test]
    async fn missing_header_is_unauthorized() {
        let state = test_state();
        let err = extract(&state, None).await.unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn non_bearer_scheme_is_unauthorized() {
        let state = test_state();
        let err = extract(&state, Some("Basic abc123")).await.unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn tampered_token_is_unauthorized() {
        let state = test_state();
        let token = state
            .jwt_manager
            .generate_token(&Uuid::new_v4(), "owner@example.com")
            .unwrap();
        let tampered = format!("Bearer {}x", token);

        let err = extract(&state, Some(&tampered)).await.unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized(_)));
    }
}
