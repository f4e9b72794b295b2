use anyhow::Result;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post, put},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal::{
    ctrl_c,
    unix::{signal, SignalKind},
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};
use tracing::info;

mod auth;
mod config;
mod database;
mod handlers;
mod menu;
mod models;
mod qr;
mod services;
mod state;
mod utils;


use auth::jwt::JwtManager;
use config::Settings;
use database::{DbPool, Repository};
use services::{AuthService, MenuService};
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,scan2dine_server=debug".to_string()),
        )
        .with_target(true)
        .with_thread_ids(true)
        .json()
        .init();

    info!("🚀 Starting Scan2Dine server...");

    // Load configuration
    let settings = Settings::load()?;
    info!("✅ Configuration loaded");

    // Connect to the database and run migrations
    let db_pool = DbPool::new(&settings.database).await?;
    info!("✅ Database ready");

    let repository = Arc::new(Repository::new(db_pool));
    let jwt_manager = Arc::new(JwtManager::new(
        &settings.security.jwt_secret,
        settings.security.jwt_expiration_seconds,
    ));

    let auth_service = Arc::new(AuthService::new(repository.clone(), jwt_manager.clone()));
    let menu_service = Arc::new(MenuService::new(repository.clone()));

    let addr = SocketAddr::from((
        settings.server.host.parse::<std::net::IpAddr>()?,
        settings.server.port,
    ));

    let app_state = AppState {
        settings,
        repository,
        jwt_manager,
        auth_service,
        menu_service,
    };

    let app = build_router(app_state);

    info!("🎯 Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn build_router(state: AppState) -> Router {
    // Pages and endpoints reachable without a session
    let public_routes = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/health/ready", get(handlers::health::readiness_check))
        .route("/", get(handlers::pages::landing_page))
        .route("/login", get(handlers::pages::login_page))
        .route("/signup", get(handlers::pages::signup_page))
        .route("/onboarding", get(handlers::pages::onboarding_page))
        .route("/dashboard", get(handlers::pages::dashboard_page))
        .route("/menu/{restaurant_id}", get(handlers::pages::menu_page))
        .route("/api/auth/signup", post(handlers::auth::signup_handler))
        .route("/api/auth/login", post(handlers::auth::login_handler))
        .route(
            "/api/public/menu/{restaurant_id}",
            get(handlers::public_menu::public_menu_handler),
        );

    // Endpoints that expect a bearer token
    let owner_routes = Router::new()
        .route("/api/auth/me", get(handlers::auth::me_handler))
        .route("/api/auth/logout", post(handlers::auth::logout_handler))
        .route(
            "/api/menu/items",
            get(handlers::menu::list_items_handler).post(handlers::menu::create_item_handler),
        )
        .route(
            "/api/menu/items/{item_id}",
            put(handlers::menu::update_item_handler).delete(handlers::menu::delete_item_handler),
        )
        .route("/api/menu/grouped", get(handlers::menu::grouped_items_handler))
        .route(
            "/api/restaurant",
            get(handlers::restaurant::get_restaurant_handler)
                .put(handlers::restaurant::update_restaurant_handler),
        )
        .route(
            "/api/restaurant/theme",
            put(handlers::restaurant::update_theme_handler),
        )
        .route("/api/onboarding", post(handlers::restaurant::onboarding_handler))
        .route("/api/dashboard/stats", get(handlers::dashboard::stats_handler))
        .route("/api/qr", get(handlers::qr::qr_image_handler))
        .route("/api/qr/download", get(handlers::qr::qr_download_handler));

    Router::new()
        .merge(public_routes)
        .merge(owner_routes)
        // CORS
        .layer(
            CorsLayer::permissive()
                .allow_origin(tower_http::cors::Any)
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any),
        )
        // Tracing
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        // Body limit (payloads are JSON plus the odd base64 logo)
        .layer(DefaultBodyLimit::max(2 * 1024 * 1024))
        .with_state(state)
}

async fn shutdown_signal() {
    let interrupt = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");
        info!("Received Ctrl+C, shutting down");
    };

    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install terminate handler")
            .recv()
            .await;
        info!("Received terminate signal, shutting down");
    };

    tokio::select! {
        _ = interrupt => {},
        _ = terminate => {},
    }
}
