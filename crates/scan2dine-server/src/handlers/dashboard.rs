use axum::extract::State;
use axum::Json;

use crate::auth::session::AuthSession;
use crate::database::models::MenuStats;
use crate::state::AppState;
use crate::utils::error::ApiError;

pub async fn stats_handler(
    State(state): State<AppState>,
    session: AuthSession,
) -> Result<Json<MenuStats>, ApiError> {
    let stats = state.menu_service.stats(&session).await?;
    Ok(Json(stats))
}
