use axum::extract::State;
use axum::Json;
use validator::Validate;

use crate::auth::session::AuthSession;
use crate::database::models::Restaurant;
use crate::models::drafts::{OnboardingForm, RestaurantChanges, ThemeUpdate};
use crate::state::AppState;
use crate::utils::error::ApiError;

pub async fn get_restaurant_handler(
    State(state): State<AppState>,
    session: AuthSession,
) -> Result<Json<Restaurant>, ApiError> {
    let restaurant = state.menu_service.profile(&session).await?;
    Ok(Json(restaurant))
}

pub async fn update_restaurant_handler(
    State(state): State<AppState>,
    session: AuthSession,
    Json(changes): Json<RestaurantChanges>,
) -> Result<Json<Restaurant>, ApiError> {
    changes
        .validate()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let restaurant = state.menu_service.update_profile(&session, &changes).await?;
    Ok(Json(restaurant))
}

pub async fn update_theme_handler(
    State(state): State<AppState>,
    session: AuthSession,
    Json(update): Json<ThemeUpdate>,
) -> Result<Json<Restaurant>, ApiError> {
    let restaurant = state.menu_service.update_theme(&session, &update.theme).await?;
    Ok(Json(restaurant))
}

pub async fn onboarding_handler(
    State(state): State<AppState>,
    session: AuthSession,
    Json(form): Json<OnboardingForm>,
) -> Result<Json<Restaurant>, ApiError> {
    form.validate()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let restaurant = state
        .menu_service
        .complete_onboarding(&session, &form)
        .await?;
    Ok(Json(restaurant))
}
