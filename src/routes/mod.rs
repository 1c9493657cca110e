use axum::{
    Router,
    response::IntoResponse,
    routing::{get, post},
};

use crate::template::{NotFoundTemplate, Template};

mod contact;
mod health;
mod index;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub contact_command: rakshan_contact::Command,
}

pub async fn fallback(template: Template) -> impl IntoResponse {
    template.render_with_status(
        axum::http::StatusCode::NOT_FOUND,
        NotFoundTemplate {
            page: template.page(),
        },
    )
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/", get(index::page))
        .route("/contact", get(contact::page).post(contact::action))
        .route("/contact/service", post(contact::select_service))
        .fallback(fallback)
        .nest_service("/static", crate::assets::AssetsService::new())
        .with_state(app_state)
}
