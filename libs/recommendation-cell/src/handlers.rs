use std::sync::Arc;

use axum::{
    extract::{Extension, State},
    http::HeaderMap,
};
use tracing::debug;

use shared_config::AppConfig;
use shared_models::auth::User;
use shared_models::error::AppError;
use shared_models::response::ApiResponse;
use shared_utils::extractor::bearer_token;

use crate::models::{
    EmotionalRecommendation, ExerciseRecommendation, FoodRecommendation, VocabularyEntry,
};
use crate::services::recommendation::RecommendationService;
use crate::services::vocabulary::vocabulary;

pub async fn get_food_recommendations(
    State(state): State<Arc<AppConfig>>,
    Extension(user): Extension<User>,
    headers: HeaderMap,
) -> Result<ApiResponse<Vec<FoodRecommendation>>, AppError> {
    let token = bearer_token(&headers)?;

    let service = RecommendationService::new(&state);
    let recommendations = service.food_recommendations(&user.id, token).await
        .map_err(|e| AppError::Database(e.to_string()))?;

    Ok(ApiResponse::success("Food recommendations retrieved", recommendations))
}

pub async fn get_exercise_recommendations(
    State(state): State<Arc<AppConfig>>,
    Extension(user): Extension<User>,
    headers: HeaderMap,
) -> Result<ApiResponse<Vec<ExerciseRecommendation>>, AppError> {
    let token = bearer_token(&headers)?;

    let service = RecommendationService::new(&state);
    let recommendations = service.exercise_recommendations(&user.id, token).await
        .map_err(|e| AppError::Database(e.to_string()))?;

    Ok(ApiResponse::success("Exercise recommendations retrieved", recommendations))
}

pub async fn get_emotional_recommendations(
    State(state): State<Arc<AppConfig>>,
    Extension(user): Extension<User>,
    headers: HeaderMap,
) -> Result<ApiResponse<Vec<EmotionalRecommendation>>, AppError> {
    let token = bearer_token(&headers)?;

    let service = RecommendationService::new(&state);
    let recommendations = service.emotional_recommendations(&user.id, token).await
        .map_err(|e| AppError::Database(e.to_string()))?;

    Ok(ApiResponse::success("Emotional recommendations retrieved", recommendations))
}

// Trigger vocabulary

pub async fn get_symptom_vocabulary(
    Extension(user): Extension<User>,
) -> ApiResponse<Vec<VocabularyEntry>> {
    debug!("Listing symptom vocabulary for user: {}", user.id);

    ApiResponse::success("Symptom vocabulary retrieved", vocabulary())
}
