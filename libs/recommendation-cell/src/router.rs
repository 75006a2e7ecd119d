use std::sync::Arc;

use axum::{
    Router,
    routing::get,
    middleware,
};

use shared_config::AppConfig;
use shared_utils::extractor::auth_middleware;

use crate::handlers;

pub fn recommendation_routes(state: Arc<AppConfig>) -> Router {
    let protected_routes = Router::new()
        .route("/food", get(handlers::get_food_recommendations))
        .route("/exercise", get(handlers::get_exercise_recommendations))
        .route("/emotional", get(handlers::get_emotional_recommendations))
        .route("/symptoms", get(handlers::get_symptom_vocabulary))
        .layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    Router::new()
        .merge(protected_routes)
        .with_state(state)
}
