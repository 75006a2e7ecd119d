pub mod bmi;
pub mod catalog;
pub mod emotional;
pub mod exercise;
pub mod food;
pub mod recommendation;
pub mod store;
pub mod vocabulary;

pub use catalog::{CatalogError, RuleCatalog};
pub use recommendation::RecommendationService;
pub use store::{HealthRecordStore, SupabaseHealthStore};
pub use vocabulary::SymptomName;
