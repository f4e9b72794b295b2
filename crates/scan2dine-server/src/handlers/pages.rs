use axum::response::Html;

// Server-rendered shells. Each page fetches its data from the JSON API.

pub async fn landing_page() -> Html<&'static str> {
    Html(include_str!("../static/landing.html"))
}

pub async fn login_page() -> Html<&'static str> {
    Html(include_str!("../static/login.html"))
}

pub async fn signup_page() -> Html<&'static str> {
    Html(include_str!("../static/signup.html"))
}

pub async fn onboarding_page() -> Html<&'static str> {
    Html(include_str!("../static/onboarding.html"))
}

pub async fn dashboard_page() -> Html<&'static str> {
    Html(include_str!("../static/dashboard.html"))
}

/// Shell for /menu/{restaurant_id}. The page reads the id from its own
/// path, so the handler takes no extractor.
pub async fn menu_page() -> Html<&'static str> {
    Html(include_str!("../static/menu.html"))
}
