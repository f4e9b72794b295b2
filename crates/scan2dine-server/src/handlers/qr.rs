use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::auth::session::AuthSession;
use crate::qr::{self, QrOptions};
use crate::state::AppState;
use crate::utils::error::ApiError;

const MAX_WIDTH: u32 = 4096;
const MAX_MARGIN: u32 = 32;

#[derive(Debug, Deserialize)]
pub struct QrQuery {
    pub width: Option<u32>,
    pub margin: Option<u32>,
    pub dark: Option<String>,
    pub light: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct QrResponse {
    /// The public menu URL the code points at.
    pub url: String,
    /// PNG as a base64 data URL, ready for an img tag.
    pub image: String,
    pub width: u32,
}

fn options_from(query: QrQuery) -> Result<QrOptions, ApiError> {
    let defaults = QrOptions::default();
    let options = QrOptions {
        width: query.width.unwrap_or(defaults.width),
        margin: query.margin.unwrap_or(defaults.margin),
        dark: query.dark.unwrap_or(defaults.dark),
        light: query.light.unwrap_or(defaults.light),
    };

    if options.width == 0 || options.width > MAX_WIDTH {
        return Err(ApiError::BadRequest(format!(
            "Width must be between 1 and {}",
            MAX_WIDTH
        )));
    }
    if options.margin > MAX_MARGIN {
        return Err(ApiError::BadRequest(format!(
            "Margin must be at most {} modules",
            MAX_MARGIN
        )));
    }
    Ok(options)
}

/// The owner's menu QR code, inline as a data URL.
pub async fn qr_image_handler(
    State(state): State<AppState>,
    session: AuthSession,
    Query(query): Query<QrQuery>,
) -> Result<Json<QrResponse>, ApiError> {
    let options = options_from(query)?;
    let url = state.settings.menu_url(&session.account_id);
    let png = qr::render_png(&url, &options)?;

    Ok(Json(QrResponse {
        url,
        image: qr::data_url(&png),
        width: options.width,
    }))
}

/// The same code as a PNG attachment, named after the restaurant.
pub async fn qr_download_handler(
    State(state): State<AppState>,
    session: AuthSession,
    Query(query): Query<QrQuery>,
) -> Result<Response, ApiError> {
    let options = options_from(query)?;
    let url = state.settings.menu_url(&session.account_id);
    let png = qr::render_png(&url, &options)?;

    // A missing profile falls back to the default filename rather than
    // failing the download.
    let restaurant_name = state
        .menu_service
        .profile(&session)
        .await
        .ok()
        .map(|restaurant| restaurant.name);
    let filename = qr::download_filename(restaurant_name.as_deref());

    let headers = [
        (header::CONTENT_TYPE, "image/png".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", filename),
        ),
    ];
    Ok((headers, png).into_response())
}
