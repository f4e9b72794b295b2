use std::sync::Arc;

use axum::extract::FromRef;

use crate::auth::jwt::JwtManager;
use crate::config::Settings;
use crate::database::Repository;
use crate::services::{AuthService, MenuService};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
    pub repository: Arc<Repository>,
    pub jwt_manager: Arc<JwtManager>,
    pub auth_service: Arc<AuthService>,
    pub menu_service: Arc<MenuService>,
}

impl FromRef<AppState> for Arc<JwtManager> {
    fn from_ref(state: &AppState) -> Self {
        state.jwt_manager.clone()
    }
}
