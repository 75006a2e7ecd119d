use anyhow::Result;
use tracing::{debug, info};

use shared_config::AppConfig;

use crate::models::{
    EmotionalRecommendation, ExerciseRecommendation, FoodRecommendation, SymptomCategory,
};
use crate::services::catalog::RuleCatalog;
use crate::services::emotional::generate_emotional_recommendations;
use crate::services::exercise::generate_exercise_recommendations;
use crate::services::food::generate_food_recommendations;
use crate::services::store::{HealthRecordStore, SupabaseHealthStore};

/// Fetches a user's latest records and runs them through the rule catalog.
pub struct RecommendationService<S = SupabaseHealthStore> {
    store: S,
    catalog: &'static RuleCatalog,
    food_symptom_window: usize,
    exercise_symptom_window: usize,
    mental_symptom_window: usize,
}

impl RecommendationService<SupabaseHealthStore> {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_store(SupabaseHealthStore::new(config), config)
    }
}

impl<S: HealthRecordStore> RecommendationService<S> {
    pub fn with_store(store: S, config: &AppConfig) -> Self {
        Self {
            store,
            catalog: RuleCatalog::global(),
            food_symptom_window: config.food_symptom_window,
            exercise_symptom_window: config.exercise_symptom_window,
            mental_symptom_window: config.mental_symptom_window,
        }
    }

    pub async fn food_recommendations(&self, user_id: &str, auth_token: &str) -> Result<Vec<FoodRecommendation>> {
        debug!("Generating food recommendations for user: {}", user_id);

        let (health, symptoms) = tokio::try_join!(
            self.store.latest_snapshot(user_id, auth_token),
            self.store.recent_symptoms(user_id, self.food_symptom_window, None, auth_token),
        )?;

        let recommendations = generate_food_recommendations(
            self.catalog,
            &health.unwrap_or_default(),
            &symptoms,
        );

        info!("Generated {} food recommendations for user {}", recommendations.len(), user_id);
        Ok(recommendations)
    }

    pub async fn exercise_recommendations(&self, user_id: &str, auth_token: &str) -> Result<Vec<ExerciseRecommendation>> {
        debug!("Generating exercise recommendations for user: {}", user_id);

        let (profile, health, symptoms) = tokio::try_join!(
            self.store.profile(user_id, auth_token),
            self.store.latest_snapshot(user_id, auth_token),
            self.store.recent_symptoms(user_id, self.exercise_symptom_window, None, auth_token),
        )?;

        let recommendations = generate_exercise_recommendations(
            self.catalog,
            &profile.unwrap_or_default(),
            &health.unwrap_or_default(),
            &symptoms,
        );

        info!("Generated {} exercise recommendations for user {}", recommendations.len(), user_id);
        Ok(recommendations)
    }

    pub async fn emotional_recommendations(&self, user_id: &str, auth_token: &str) -> Result<Vec<EmotionalRecommendation>> {
        debug!("Generating emotional recommendations for user: {}", user_id);

        let (health, mental_symptoms) = tokio::try_join!(
            self.store.latest_snapshot(user_id, auth_token),
            self.store.recent_symptoms(
                user_id,
                self.mental_symptom_window,
                Some(SymptomCategory::Mental),
                auth_token,
            ),
        )?;

        let emotional_state = health.map(|h| h.emotional_state).unwrap_or_default();
        let recommendations = generate_emotional_recommendations(
            self.catalog,
            &emotional_state,
            &mental_symptoms,
        );

        info!("Generated {} emotional recommendations for user {}", recommendations.len(), user_id);
        Ok(recommendations)
    }
}
