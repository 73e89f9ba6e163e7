// 🌐 HTTP host - serves the rendered page and the registry as JSON

use crate::content::ContentRegistry;
use crate::navigation::Anchor;
use crate::page::{current_year, render_document};
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Json},
    routing::get,
    Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::{debug, error};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    registry: Arc<ContentRegistry>,
}

impl AppState {
    pub fn new(registry: ContentRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }
}

/// API Response wrapper
#[derive(Serialize)]
struct ApiResponse<T> {
    success: bool,
    data: T,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// GET / - Render the page. The footer year is read per request.
async fn serve_index(State(state): State<AppState>) -> impl IntoResponse {
    let year = current_year();
    debug!(year, "rendering page");
    match render_document(&state.registry, year) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            error!("Error rendering page: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Template error").into_response()
        }
    }
}

/// GET /api/health - Health check
async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::ok("OK"))
}

/// GET /api/content - The whole registry
async fn get_content(State(state): State<AppState>) -> impl IntoResponse {
    Json(ApiResponse::ok(state.registry.as_ref().clone()))
}

/// GET /api/sections - Anchor ids in page order
async fn get_sections() -> impl IntoResponse {
    Json(ApiResponse::ok(Anchor::ALL))
}

pub fn router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/content", get(get_content))
        .route("/sections", get(get_sections))
        .with_state(state.clone());

    Router::new()
        .route("/", get(serve_index))
        .with_state(state)
        .nest("/api", api_routes)
        .layer(CorsLayer::permissive())
}
