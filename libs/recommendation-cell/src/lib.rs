pub mod handlers;
pub mod router;
pub mod models;
pub mod services;

pub use models::{
    BmiCategory,
    EmotionalRecommendation,
    ExerciseRecommendation,
    FoodRecommendation,
    HealthSnapshot,
    Profile,
    SymptomEntry,
};

pub use router::recommendation_routes;

pub mod api {
    pub use crate::services::bmi::classify;
    pub use crate::services::catalog::{CatalogError, RuleCatalog};
    pub use crate::services::emotional::generate_emotional_recommendations;
    pub use crate::services::exercise::generate_exercise_recommendations;
    pub use crate::services::food::generate_food_recommendations;
    pub use crate::services::recommendation::RecommendationService;
    pub use crate::services::store::{HealthRecordStore, SupabaseHealthStore};
}
