use axum::response::{IntoResponse, Redirect};

/// The site has a single page, the landing URL goes straight to it.
pub async fn page() -> impl IntoResponse {
    Redirect::to("/contact")
}
