use axum::{Router, middleware, routing::get};
use tower_http::{services::ServeDir, trace::TraceLayer};

use super::health;
use super::middleware::{logging_middleware, metrics_middleware, security_headers_middleware};
use super::pages;
use super::state::AppState;
use super::v1;
use crate::infrastructure::observability::{PrometheusMetrics, create_metrics_router};

/// Create the full router with application state
pub fn create_router(state: AppState) -> Router {
    let sounds = ServeDir::new(state.sounds.dir());
    let assets = ServeDir::new(&state.static_dir);

    Router::new()
        // Pages
        .route("/", get(pages::home))
        .route("/search", get(pages::search))
        .route("/pokemon/{id}", get(pages::pokemon_detail))
        // JSON API
        .nest("/api/v1", v1::create_v1_router())
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::live_check))
        // Static files
        .nest_service("/sounds", sounds)
        .nest_service("/static", assets)
        .fallback(pages::not_found)
        .with_state(state)
}

/// Router plus middleware and the optional metrics endpoint
pub fn create_app(state: AppState, metrics: Option<(PrometheusMetrics, String)>) -> Router {
    let mut router = create_router(state);

    if let Some((metrics, path)) = metrics {
        router = router.merge(create_metrics_router(metrics, &path));
    }

    router
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
}
