use axum::extract::{Path, State};
use axum::Json;
use uuid::Uuid;

use crate::services::menu_service::PublicMenuView;
use crate::state::AppState;

/// Public menu payload for diners. Always answers 200: the body's state
/// field tells the page whether to render the menu, a coming-soon box,
/// or a not-found box.
pub async fn public_menu_handler(
    State(state): State<AppState>,
    Path(restaurant_id): Path<String>,
) -> Json<PublicMenuView> {
    // A malformed id can never match a restaurant, so it reads as one
    // that does not exist.
    let Ok(restaurant_id) = Uuid::parse_str(&restaurant_id) else {
        return Json(PublicMenuView::not_found());
    };

    Json(state.menu_service.public_menu(&restaurant_id).await)
}
