use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::auth::session::AuthSession;
use crate::database::models::Restaurant;
use crate::state::AppState;
use crate::utils::error::ApiError;

#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
    #[validate(length(min = 1, max = 120, message = "Restaurant name must be 1-120 characters"))]
    pub restaurant_name: String,
    #[validate(length(max = 120, message = "Owner name must be at most 120 characters"))]
    pub owner_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub account_id: Uuid,
    pub email: String,
    pub restaurant: Restaurant,
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub account_id: Uuid,
    pub email: String,
    pub restaurant: Restaurant,
}

pub async fn signup_handler(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    request
        .validate()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let outcome = state
        .auth_service
        .signup(
            &request.email,
            &request.password,
            request.restaurant_name.trim(),
            request.owner_name.as_deref(),
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token: outcome.token,
            account_id: outcome.account_id,
            email: outcome.email,
            restaurant: outcome.restaurant,
        }),
    ))
}

pub async fn login_handler(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let outcome = state
        .auth_service
        .login(&request.email, &request.password)
        .await?;

    Ok(Json(AuthResponse {
        token: outcome.token,
        account_id: outcome.account_id,
        email: outcome.email,
        restaurant: outcome.restaurant,
    }))
}

/// Resolves the bearer token back into the owning account and its
/// restaurant.
pub async fn me_handler(
    State(state): State<AppState>,
    session: AuthSession,
) -> Result<Json<SessionResponse>, ApiError> {
    let restaurant = state.menu_service.profile(&session).await?;

    Ok(Json(SessionResponse {
        account_id: session.account_id,
        email: session.email,
        restaurant,
    }))
}

/// Tokens are stateless, so logout is just an audit line. Clients drop
/// the token.
pub async fn logout_handler(session: AuthSession) -> StatusCode {
    info!("Logout for account {}", session.account_id);
    StatusCode::NO_CONTENT
}
