use std::fmt;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// PostgREST returns `null` for unset text columns.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// RFC 3339, or an offset-less `timestamp` column read as UTC. Anything else
/// becomes `None`.
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(Value::String(raw)) = Option::<Value>::deserialize(deserializer)? else {
        return Ok(None);
    };

    if let Ok(parsed) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(Some(parsed.with_timezone(&Utc)));
    }

    let naive = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .into_iter()
        .find_map(|format| NaiveDateTime::parse_from_str(&raw, format).ok());

    Ok(naive.map(|naive| naive.and_utc()))
}

// ==============================================================================
// INPUT RECORDS
// ==============================================================================

/// Latest `health_data` row for a user. Every field defaults so a missing row
/// can be replaced by `HealthSnapshot::default()`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthSnapshot {
    #[serde(deserialize_with = "null_as_default")]
    pub user_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub bmi: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub activity_level: String,
    #[serde(deserialize_with = "null_as_default")]
    pub emotional_state: String,
    #[serde(deserialize_with = "lenient_timestamp")]
    pub record_date: Option<DateTime<Utc>>,
}

impl HealthSnapshot {
    /// `None` when the activity level was left empty.
    pub fn activity_level(&self) -> Option<ActivityLevel> {
        ActivityLevel::parse(&self.activity_level)
    }

    pub fn emotional_state(&self) -> Option<EmotionalState> {
        EmotionalState::parse(&self.emotional_state)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymptomCategory {
    Physical,
    Mental,
    #[default]
    #[serde(other)]
    Other,
}

impl SymptomCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            SymptomCategory::Physical => "physical",
            SymptomCategory::Mental => "mental",
            SymptomCategory::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SymptomEntry {
    #[serde(deserialize_with = "null_as_default")]
    pub symptom_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub symptom_type: SymptomCategory,
    #[serde(deserialize_with = "lenient_timestamp")]
    pub logged_at: Option<DateTime<Utc>>,
}

impl SymptomEntry {
    pub fn new(symptom_name: &str, symptom_type: SymptomCategory) -> Self {
        Self {
            symptom_name: symptom_name.to_string(),
            symptom_type,
            logged_at: None,
        }
    }
}

/// User attributes consulted by the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    /// Fallback when the snapshot carries no activity level.
    #[serde(deserialize_with = "null_as_default")]
    pub activity_level: String,
}

impl Profile {
    pub fn activity_level(&self) -> Option<ActivityLevel> {
        ActivityLevel::parse(&self.activity_level)
    }
}

// ==============================================================================
// CLASSIFICATIONS
// ==============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
    Unclassified,
}

impl BmiCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
            BmiCategory::Unclassified => "Unclassified",
        }
    }

    pub fn is_above_normal(&self) -> bool {
        matches!(self, BmiCategory::Overweight | BmiCategory::Obese)
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    Unrecognized,
}

impl ActivityLevel {
    /// Exact match on the stored tag. Empty means unset.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "" => None,
            "sedentary" => Some(ActivityLevel::Sedentary),
            "light" => Some(ActivityLevel::Light),
            "moderate" => Some(ActivityLevel::Moderate),
            "active" => Some(ActivityLevel::Active),
            _ => Some(ActivityLevel::Unrecognized),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmotionalState {
    Stressed,
    Anxious,
    Sad,
    Happy,
    Neutral,
    Unrecognized,
}

impl EmotionalState {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "" => None,
            "stressed" => Some(EmotionalState::Stressed),
            "anxious" => Some(EmotionalState::Anxious),
            "sad" => Some(EmotionalState::Sad),
            "happy" => Some(EmotionalState::Happy),
            "neutral" => Some(EmotionalState::Neutral),
            _ => Some(EmotionalState::Unrecognized),
        }
    }
}

// ==============================================================================
// OUTPUT RECORDS
// ==============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodCategory {
    WeightGain,
    WeightLoss,
    Maintenance,
    BloodPressure,
    Digestive,
    Cholesterol,
    Energy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseCategory {
    Beginner,
    IntermediateLight,
    Intermediate,
    Advanced,
    WeightLoss,
    LowImpact,
}

/// Tag carried by emotional recommendations; also the dedup key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmotionalTag {
    Stressed,
    Anxious,
    Sad,
    Happy,
    Neutral,
    SleepIssue,
    Burnout,
    Lonely,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodRecommendation {
    pub category: FoodCategory,
    pub title: String,
    pub description: String,
    pub foods: Vec<String>,
    pub avoid: Vec<String>,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseRecommendation {
    pub category: ExerciseCategory,
    pub title: String,
    pub description: String,
    pub exercises: Vec<String>,
    pub duration: String,
    pub frequency: String,
    pub intensity: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionalRecommendation {
    pub emotional_state: EmotionalTag,
    pub title: String,
    pub description: String,
    pub activities: Vec<String>,
    pub tips: Vec<String>,
    pub reason: String,
}

/// One row of the trigger vocabulary listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VocabularyEntry {
    pub name: &'static str,
    pub localized_name: &'static str,
    pub symptom_type: SymptomCategory,
}
