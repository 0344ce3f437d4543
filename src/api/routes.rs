//! Application route configuration.

use std::sync::Arc;

use axum::{extract::State, response::Json, routing::get, Router};
use serde::Serialize;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{auth_routes, barcode_routes, training_routes, upload_routes, user_routes};
use super::openapi::ApiDoc;
use super::AppState;
use crate::config::{
    Config, IMAGE_UPLOAD_SUBDIR, IMAGE_URL_PREFIX, VIDEO_UPLOAD_SUBDIR, VIDEO_URL_PREFIX,
};
use crate::errors::AppResult;
use crate::services::{run_blocking, StoreStats};

/// Create the application router with all routes configured
pub fn create_router(state: AppState, config: &Config) -> Router {
    let api = Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(training_routes())
        .merge(upload_routes())
        .merge(barcode_routes());

    Router::new()
        .route("/health", get(health))
        // OpenAPI Swagger UI documentation
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api", api)
        // Uploaded media
        .nest_service(
            VIDEO_URL_PREFIX,
            ServeDir::new(config.upload_dir.join(VIDEO_UPLOAD_SUBDIR)),
        )
        .nest_service(
            IMAGE_URL_PREFIX,
            ServeDir::new(config.upload_dir.join(IMAGE_UPLOAD_SUBDIR)),
        )
        // Client bundle
        .fallback_service(ServeDir::new(&config.client_dir))
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check response
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    status: String,
    stores: StoreStats,
}

/// Health check with store record counts
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Server is up", body = HealthResponse)
    )
)]
pub async fn health(State(state): State<AppState>) -> AppResult<Json<HealthResponse>> {
    let services = Arc::clone(state.services());
    let stores = run_blocking(move || Ok(services.stats())).await?;

    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        stores,
    }))
}
