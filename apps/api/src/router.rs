use std::sync::Arc;

use axum::{
    Json,
    Router,
    routing::get,
};
use serde_json::{json, Value};

use recommendation_cell::router::recommendation_routes;
use shared_config::AppConfig;

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "message": "Health Tracker API is running"
    }))
}

pub fn create_router(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api/recommendations", recommendation_routes(state))
}
