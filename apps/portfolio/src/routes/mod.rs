pub mod api;
pub mod health;
pub mod pages;

use axum::{
    http::Uri,
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Router,
};
use tower_http::services::ServeDir;

use crate::errors::AppError;
use crate::state::AppState;

/// Unknown API paths get a JSON 404; any other unknown path goes back home.
async fn fallback(uri: Uri) -> Response {
    if uri.path().starts_with("/api/") {
        return AppError::NotFound(format!("No route for {}", uri.path())).into_response();
    }
    tracing::debug!(path = uri.path(), "unknown page, redirecting home");
    Redirect::to("/").into_response()
}

pub fn build_router(state: AppState) -> Router {
    let assets = ServeDir::new(&state.config.assets_dir);

    Router::new()
        .route("/health", get(health::health_handler))
        // HTML pages
        .route("/", get(pages::home))
        .route("/projects/:id", get(pages::project_detail))
        .route("/publications", get(pages::publications))
        .route("/resume", get(pages::resume))
        // JSON API
        .route("/api/v1/projects", get(api::list_projects))
        .route("/api/v1/projects/:id", get(api::get_project))
        .route("/api/v1/publications", get(api::list_publications))
        .route("/api/v1/resume/:mode", get(api::get_resume))
        .route("/api/v1/tags", get(api::list_tags))
        .nest_service("/assets", assets)
        .fallback(fallback)
        .with_state(state)
}
