use std::collections::HashMap;

use once_cell::sync::Lazy;
use thiserror::Error;
use tracing::info;

use crate::models::{
    ActivityLevel, EmotionalRecommendation, EmotionalState, EmotionalTag,
    ExerciseCategory, ExerciseRecommendation, FoodCategory, FoodRecommendation,
    SymptomCategory,
};
use crate::services::vocabulary::SymptomName;

static CATALOG: Lazy<RuleCatalog> = Lazy::new(RuleCatalog::standard);

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Symptom {name:?} label '{label}' does not resolve back to itself")]
    LabelMismatch { name: SymptomName, label: &'static str },

    #[error("Symptom label '{0}' is used by more than one symptom")]
    DuplicateLabel(&'static str),

    #[error("Mental symptom rule is keyed by non-mental symptom {0:?}")]
    NotMental(SymptomName),

    #[error("Rule '{0}' has an empty payload")]
    EmptyPayload(String),

    #[error("Trigger rule '{0}' has no trigger symptoms")]
    NoTriggers(String),
}

/// Food payload appended when any of `triggers` was logged recently.
#[derive(Debug, Clone)]
pub struct FoodTriggerRule {
    pub triggers: Vec<SymptomName>,
    pub recommendation: FoodRecommendation,
}

/// Read-only rule tables shared by every request.
#[derive(Debug, Clone)]
pub struct RuleCatalog {
    pub(crate) food_weight_gain: FoodRecommendation,
    pub(crate) food_weight_loss: FoodRecommendation,
    pub(crate) food_maintenance: FoodRecommendation,
    /// Evaluated in declaration order.
    pub(crate) food_triggers: Vec<FoodTriggerRule>,

    pub(crate) exercise_sedentary: ExerciseRecommendation,
    pub(crate) exercise_light: ExerciseRecommendation,
    pub(crate) exercise_moderate: ExerciseRecommendation,
    pub(crate) exercise_active: ExerciseRecommendation,
    pub(crate) exercise_weight_loss: ExerciseRecommendation,
    pub(crate) exercise_low_impact: ExerciseRecommendation,
    pub(crate) low_impact_triggers: Vec<SymptomName>,

    pub(crate) emotional_stressed: EmotionalRecommendation,
    pub(crate) emotional_anxious: EmotionalRecommendation,
    pub(crate) emotional_sad: EmotionalRecommendation,
    pub(crate) emotional_happy: EmotionalRecommendation,
    pub(crate) emotional_neutral: EmotionalRecommendation,
    pub(crate) mental_symptoms: HashMap<SymptomName, EmotionalRecommendation>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

fn food(
    category: FoodCategory,
    title: &str,
    description: &str,
    foods: &[&str],
    avoid: &[&str],
    reason: &str,
) -> FoodRecommendation {
    FoodRecommendation {
        category,
        title: title.to_string(),
        description: description.to_string(),
        foods: strings(foods),
        avoid: strings(avoid),
        reason: reason.to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
fn exercise(
    category: ExerciseCategory,
    title: &str,
    description: &str,
    exercises: &[&str],
    duration: &str,
    frequency: &str,
    intensity: &str,
    reason: &str,
) -> ExerciseRecommendation {
    ExerciseRecommendation {
        category,
        title: title.to_string(),
        description: description.to_string(),
        exercises: strings(exercises),
        duration: duration.to_string(),
        frequency: frequency.to_string(),
        intensity: intensity.to_string(),
        reason: reason.to_string(),
    }
}

fn emotional(
    emotional_state: EmotionalTag,
    title: &str,
    description: &str,
    activities: &[&str],
    tips: &[&str],
    reason: &str,
) -> EmotionalRecommendation {
    EmotionalRecommendation {
        emotional_state,
        title: title.to_string(),
        description: description.to_string(),
        activities: strings(activities),
        tips: strings(tips),
        reason: reason.to_string(),
    }
}

impl RuleCatalog {
    /// Process-wide catalog, built on first use.
    pub fn global() -> &'static RuleCatalog {
        &CATALOG
    }

    /// Builds the catalog and checks it against the symptom vocabulary.
    pub fn init() -> Result<&'static RuleCatalog, CatalogError> {
        let catalog = Self::global();
        catalog.validate()?;
        info!(
            "Recommendation catalog ready: {} food triggers, {} mental symptom rules, {} vocabulary entries",
            catalog.food_triggers.len(),
            catalog.mental_symptoms.len(),
            SymptomName::ALL.len()
        );
        Ok(catalog)
    }

    pub fn standard() -> Self {
        Self {
            food_weight_gain: food(
                FoodCategory::WeightGain,
                "Foods for Healthy Weight Gain",
                "Increase calorie intake with nutrient-dense foods",
                &["Avocado", "Nuts", "Full-cream milk", "Brown rice", "Lean meat", "Eggs", "Cheese", "Yogurt"],
                &["Fast food", "Soft drinks"],
                "Your BMI is below normal, increase your intake of healthy calories",
            ),
            food_weight_loss: food(
                FoodCategory::WeightLoss,
                "Foods for Weight Loss",
                "Focus on low-calorie, high-fiber foods",
                &["Leafy greens", "Fresh fruit", "Fish", "Chicken breast", "Oatmeal", "Quinoa", "Almonds"],
                &["Fried food", "High-sugar food", "Sweetened drinks", "Fast food", "Processed food"],
                "Your BMI is above normal, reduce your calorie intake",
            ),
            food_maintenance: food(
                FoodCategory::Maintenance,
                "Keep a Healthy Diet",
                "Continue eating a balanced diet",
                &["Colorful vegetables", "Balanced protein", "Complex carbohydrates", "Fresh fruit", "Enough water"],
                &["Ultra-processed food", "Excess sugar"],
                "Your BMI is normal, keep up your healthy eating pattern",
            ),
            food_triggers: vec![
                FoodTriggerRule {
                    triggers: vec![SymptomName::HighBloodPressure],
                    recommendation: food(
                        FoodCategory::BloodPressure,
                        "Foods for Blood Pressure",
                        "DASH diet to control blood pressure",
                        &["Banana", "Spinach", "Broccoli", "Salmon", "Potato", "Red beans", "Watermelon"],
                        &["Excess salt", "Canned food", "Chips", "Salty food"],
                        "You have high blood pressure",
                    ),
                },
                FoodTriggerRule {
                    triggers: vec![SymptomName::Gastritis, SymptomName::DigestiveDisorder],
                    recommendation: food(
                        FoodCategory::Digestive,
                        "Foods for Digestion",
                        "Easily digested foods that soothe the stomach",
                        &["Banana", "White rice", "White bread", "Boiled chicken", "Ginger", "Papaya", "Yogurt"],
                        &["Spicy food", "Coffee", "Alcohol", "Oily food", "Citrus"],
                        "You have digestive problems",
                    ),
                },
                FoodTriggerRule {
                    triggers: vec![SymptomName::HighCholesterol],
                    recommendation: food(
                        FoodCategory::Cholesterol,
                        "Foods for Cholesterol",
                        "Foods that help lower cholesterol",
                        &["Oatmeal", "Salmon", "Walnuts", "Avocado", "Olive oil", "Apple", "Spinach"],
                        &["Fatty red meat", "Excess egg yolk", "Butter", "Fried food"],
                        "You have high cholesterol",
                    ),
                },
                FoodTriggerRule {
                    triggers: vec![SymptomName::PhysicalFatigue, SymptomName::EmotionalExhaustion],
                    recommendation: food(
                        FoodCategory::Energy,
                        "Energy-Boosting Foods",
                        "Nutrition to fight fatigue",
                        &["Spinach", "Banana", "Almonds", "Eggs", "Salmon", "Sweet potato", "Dark chocolate"],
                        &["Excess sugar", "Excess caffeine", "Alcohol"],
                        "You are experiencing fatigue",
                    ),
                },
            ],

            exercise_sedentary: exercise(
                ExerciseCategory::Beginner,
                "Start with Light Activity",
                "Build an exercise habit gradually",
                &["Walking 15-30 minutes", "Morning stretching", "Beginner yoga", "Easy swimming"],
                "15-30 minutes",
                "3-4 times/week",
                "Light",
                "Your activity level is low, start slowly",
            ),
            exercise_light: exercise(
                ExerciseCategory::IntermediateLight,
                "Increase Workout Intensity",
                "Add variety and duration to your training",
                &["Light jogging", "Casual cycling", "Aerobics", "Pilates"],
                "30-45 minutes",
                "4-5 times/week",
                "Light-Moderate",
                "You are already lightly active, raise the intensity",
            ),
            exercise_moderate: exercise(
                ExerciseCategory::Intermediate,
                "Vary Your Training",
                "Combine cardio and strength training",
                &["5K run", "HIIT workout", "Weight lifting", "Lap swimming", "Badminton"],
                "45-60 minutes",
                "5 times/week",
                "Moderate",
                "Your activity level is moderate, add variety",
            ),
            exercise_active: exercise(
                ExerciseCategory::Advanced,
                "Maintain Performance",
                "Stay consistent and avoid overtraining",
                &["Long-distance running", "CrossFit", "Interval training", "Competitive sports"],
                "60+ minutes",
                "5-6 times/week with 1 rest day",
                "High",
                "You are very active, keep a healthy balance",
            ),
            exercise_weight_loss: exercise(
                ExerciseCategory::WeightLoss,
                "Exercise for Weight Loss",
                "Cardio combinations to burn calories",
                &["Brisk walking", "Swimming", "Stationary bike", "Elliptical trainer", "Zumba"],
                "45-60 minutes",
                "5-6 times/week",
                "Moderate",
                "Focus on burning calories to lose weight",
            ),
            exercise_low_impact: exercise(
                ExerciseCategory::LowImpact,
                "Low-Impact Exercise",
                "Activities that do not strain the joints",
                &["Swimming", "Yoga", "Tai Chi", "Stationary cycling", "Water aerobics"],
                "20-30 minutes",
                "3-4 times/week",
                "Light",
                "You are experiencing pain, choose gentle exercise",
            ),
            low_impact_triggers: vec![SymptomName::JointPain, SymptomName::MusclePain],

            emotional_stressed: emotional(
                EmotionalTag::Stressed,
                "Manage Your Stress",
                "Relaxation techniques to reduce stress",
                &["10-minute meditation", "Deep breathing (4-7-8)", "Relaxed walk in nature", "Listening to calming music", "Journaling"],
                &["Sleep 7-8 hours", "Limit screen time", "Make time for yourself", "Talk to someone close"],
                "You are feeling stressed",
            ),
            emotional_anxious: emotional(
                EmotionalTag::Anxious,
                "Cope with Anxiety",
                "Activities to calm an anxious mind",
                &["Grounding technique (5-4-3-2-1)", "Progressive muscle relaxation", "Restorative yoga", "Coloring mandalas", "Knitting/crafts"],
                &["Avoid excess caffeine", "Limit negative news", "Stay connected with loved ones", "Focus on what you can control"],
                "You are feeling anxious",
            ),
            emotional_sad: emotional(
                EmotionalTag::Sad,
                "Lift Your Mood",
                "Activities to raise your spirits",
                &["Light exercise (endorphins)", "Meeting friends", "Watching a favorite film", "Cooking a favorite meal", "Gardening"],
                &["Don't isolate yourself", "Keep your routine", "Get morning sunlight", "If it persists, consider counseling"],
                "You are feeling sad",
            ),
            emotional_happy: emotional(
                EmotionalTag::Happy,
                "Keep the Happiness Going",
                "Activities to sustain a positive mood",
                &["Share your happiness", "Gratitude journal", "Enjoy a hobby", "Quality time with family", "Fun exercise"],
                &["Celebrate small wins", "Help others", "Save happy moments", "Stay grateful"],
                "Your mood is good, keep it up!",
            ),
            emotional_neutral: emotional(
                EmotionalTag::Neutral,
                "Keep Your Emotions Balanced",
                "Activities for mental wellbeing",
                &["Daily mindfulness", "Regular exercise", "Creative hobbies", "Healthy socializing", "Learning something new"],
                &["Keep a healthy routine", "Check in with your feelings regularly", "Get enough rest"],
                "Keep your emotional balance",
            ),
            mental_symptoms: HashMap::from([
                (
                    SymptomName::SleepDisorder,
                    emotional(
                        EmotionalTag::SleepIssue,
                        "Improve Your Sleep Quality",
                        "Tips for better sleep",
                        &["Fixed bedtime routine", "No gadgets 1 hour before bed", "Warm bath", "Lavender aromatherapy", "Reading a book"],
                        &["Dark, cool bedroom", "Avoid caffeine in the afternoon", "Exercise in the morning, not at night", "Consistent sleep schedule"],
                        "You are experiencing sleep problems",
                    ),
                ),
                (
                    SymptomName::Burnout,
                    emotional(
                        EmotionalTag::Burnout,
                        "Recover from Burnout",
                        "Recovery steps from emotional exhaustion",
                        &["Take leave/rest", "Delegate tasks", "Reconnect with your passion", "Digital detox", "Spa/self-care day"],
                        &["Set clear boundaries", "Learn to say 'no'", "Prioritize your health", "Consider professional counseling"],
                        "You are experiencing burnout",
                    ),
                ),
                (
                    SymptomName::SocialLoneliness,
                    emotional(
                        EmotionalTag::Lonely,
                        "Build Social Connections",
                        "Activities to reduce loneliness",
                        &["Contact an old friend", "Join a hobby community", "Volunteer", "Adopt a pet", "Join a class/workshop"],
                        &["Quality over quantity in relationships", "Don't be afraid to start a conversation", "Online communities count too", "Be a good listener"],
                        "You are feeling lonely",
                    ),
                ),
            ]),
        }
    }

    pub fn food_weight_gain(&self) -> &FoodRecommendation {
        &self.food_weight_gain
    }

    pub fn food_weight_loss(&self) -> &FoodRecommendation {
        &self.food_weight_loss
    }

    pub fn food_maintenance(&self) -> &FoodRecommendation {
        &self.food_maintenance
    }

    pub fn food_triggers(&self) -> &[FoodTriggerRule] {
        &self.food_triggers
    }

    pub fn exercise_for_level(&self, level: ActivityLevel) -> Option<&ExerciseRecommendation> {
        match level {
            ActivityLevel::Sedentary => Some(&self.exercise_sedentary),
            ActivityLevel::Light => Some(&self.exercise_light),
            ActivityLevel::Moderate => Some(&self.exercise_moderate),
            ActivityLevel::Active => Some(&self.exercise_active),
            ActivityLevel::Unrecognized => None,
        }
    }

    pub fn exercise_weight_loss(&self) -> &ExerciseRecommendation {
        &self.exercise_weight_loss
    }

    pub fn exercise_low_impact(&self) -> &ExerciseRecommendation {
        &self.exercise_low_impact
    }

    pub fn low_impact_triggers(&self) -> &[SymptomName] {
        &self.low_impact_triggers
    }

    pub fn emotional_for_state(&self, state: EmotionalState) -> Option<&EmotionalRecommendation> {
        match state {
            EmotionalState::Stressed => Some(&self.emotional_stressed),
            EmotionalState::Anxious => Some(&self.emotional_anxious),
            EmotionalState::Sad => Some(&self.emotional_sad),
            EmotionalState::Happy => Some(&self.emotional_happy),
            EmotionalState::Neutral => Some(&self.emotional_neutral),
            EmotionalState::Unrecognized => None,
        }
    }

    pub fn emotional_for_symptom(&self, name: SymptomName) -> Option<&EmotionalRecommendation> {
        self.mental_symptoms.get(&name)
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut owners: HashMap<&'static str, SymptomName> = HashMap::new();
        for name in SymptomName::ALL {
            for label in [name.label(), name.localized_label()] {
                if SymptomName::from_label(label) != Some(name) {
                    return Err(CatalogError::LabelMismatch { name, label });
                }
                if let Some(existing) = owners.insert(label, name) {
                    if existing != name {
                        return Err(CatalogError::DuplicateLabel(label));
                    }
                }
            }
        }

        for name in self.mental_symptoms.keys() {
            if name.category() != SymptomCategory::Mental {
                return Err(CatalogError::NotMental(*name));
            }
        }

        for rule in &self.food_triggers {
            if rule.triggers.is_empty() {
                return Err(CatalogError::NoTriggers(rule.recommendation.title.clone()));
            }
        }
        if self.low_impact_triggers.is_empty() {
            return Err(CatalogError::NoTriggers(self.exercise_low_impact.title.clone()));
        }

        let foods = [&self.food_weight_gain, &self.food_weight_loss, &self.food_maintenance]
            .into_iter()
            .chain(self.food_triggers.iter().map(|rule| &rule.recommendation));
        for rec in foods {
            if rec.title.is_empty() || rec.foods.is_empty() {
                return Err(CatalogError::EmptyPayload(format!("{:?}", rec.category)));
            }
        }

        let exercises = [
            &self.exercise_sedentary,
            &self.exercise_light,
            &self.exercise_moderate,
            &self.exercise_active,
            &self.exercise_weight_loss,
            &self.exercise_low_impact,
        ];
        for rec in exercises {
            if rec.title.is_empty() || rec.exercises.is_empty() {
                return Err(CatalogError::EmptyPayload(format!("{:?}", rec.category)));
            }
        }

        let emotions = [
            &self.emotional_stressed,
            &self.emotional_anxious,
            &self.emotional_sad,
            &self.emotional_happy,
            &self.emotional_neutral,
        ]
        .into_iter()
        .chain(self.mental_symptoms.values());
        for rec in emotions {
            if rec.title.is_empty() || rec.activities.is_empty() {
                return Err(CatalogError::EmptyPayload(format!("{:?}", rec.emotional_state)));
            }
        }

        Ok(())
    }
}
