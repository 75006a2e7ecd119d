use tracing::debug;

use crate::models::{ActivityLevel, ExerciseRecommendation, HealthSnapshot, Profile, SymptomEntry};
use crate::services::bmi::classify;
use crate::services::catalog::RuleCatalog;
use crate::services::vocabulary::SymptomName;

/// The snapshot's level wins unless it was left empty.
pub fn effective_activity_level(profile: &Profile, health: &HealthSnapshot) -> Option<ActivityLevel> {
    health.activity_level().or_else(|| profile.activity_level())
}

/// Activity-level entry, then the weight-loss entry, then at most one
/// low-impact entry.
pub fn generate_exercise_recommendations(
    catalog: &RuleCatalog,
    profile: &Profile,
    health: &HealthSnapshot,
    symptoms: &[SymptomEntry],
) -> Vec<ExerciseRecommendation> {
    let mut recommendations = Vec::new();

    let activity_level = effective_activity_level(profile, health);
    if let Some(rec) = activity_level.and_then(|level| catalog.exercise_for_level(level)) {
        recommendations.push(rec.clone());
    }

    let bmi_category = classify(health.bmi);
    if bmi_category.is_above_normal() {
        recommendations.push(catalog.exercise_weight_loss().clone());
    }

    let pain = symptoms
        .iter()
        .filter_map(|entry| SymptomName::from_label(&entry.symptom_name))
        .find(|name| catalog.low_impact_triggers().contains(name));
    if pain.is_some() {
        recommendations.push(catalog.exercise_low_impact().clone());
    }

    debug!(
        "Exercise rules: activity level {:?}, bmi category {}, pain trigger {:?}, {} recommendations",
        activity_level,
        bmi_category,
        pain,
        recommendations.len()
    );

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExerciseCategory, SymptomCategory};

    fn profile(level: &str) -> Profile {
        Profile {
            id: "user-1".to_string(),
            activity_level: level.to_string(),
        }
    }

    fn snapshot(bmi: f64, level: &str) -> HealthSnapshot {
        HealthSnapshot {
            bmi,
            activity_level: level.to_string(),
            ..Default::default()
        }
    }

    fn physical(name: &str) -> SymptomEntry {
        SymptomEntry::new(name, SymptomCategory::Physical)
    }

    fn categories(recs: &[ExerciseRecommendation]) -> Vec<ExerciseCategory> {
        recs.iter().map(|r| r.category).collect()
    }

    #[test]
    fn test_profile_level_used_when_snapshot_empty() {
        let health = snapshot(22.0, "");
        assert_eq!(effective_activity_level(&profile("moderate"), &health), Some(ActivityLevel::Moderate));

        let recs = generate_exercise_recommendations(RuleCatalog::global(), &profile("moderate"), &health, &[]);
        assert_eq!(categories(&recs), vec![ExerciseCategory::Intermediate]);
    }

    #[test]
    fn test_snapshot_level_beats_profile() {
        let recs = generate_exercise_recommendations(
            RuleCatalog::global(),
            &profile("active"),
            &snapshot(22.0, "sedentary"),
            &[],
        );
        assert_eq!(categories(&recs), vec![ExerciseCategory::Beginner]);
    }

    #[test]
    fn test_unrecognized_snapshot_level_does_not_fall_back() {
        let recs = generate_exercise_recommendations(
            RuleCatalog::global(),
            &profile("active"),
            &snapshot(22.0, "very active"),
            &[],
        );
        assert!(recs.is_empty());
    }

    #[test]
    fn test_each_level_maps_to_its_tier() {
        let cases = [
            ("sedentary", ExerciseCategory::Beginner),
            ("light", ExerciseCategory::IntermediateLight),
            ("moderate", ExerciseCategory::Intermediate),
            ("active", ExerciseCategory::Advanced),
        ];
        for (level, expected) in cases {
            let recs = generate_exercise_recommendations(
                RuleCatalog::global(),
                &Profile::default(),
                &snapshot(22.0, level),
                &[],
            );
            assert_eq!(categories(&recs), vec![expected], "level {}", level);
        }
    }

    #[test]
    fn test_obese_active_user() {
        let recs = generate_exercise_recommendations(
            RuleCatalog::global(),
            &Profile::default(),
            &snapshot(31.0, "active"),
            &[],
        );
        assert_eq!(categories(&recs), vec![ExerciseCategory::Advanced, ExerciseCategory::WeightLoss]);
    }

    #[test]
    fn test_repeated_joint_pain_adds_one_low_impact_entry() {
        let symptoms = [
            physical("Joint Pain"),
            physical("Joint Pain"),
            physical("Muscle Pain"),
        ];
        let recs = generate_exercise_recommendations(
            RuleCatalog::global(),
            &Profile::default(),
            &snapshot(31.0, "active"),
            &symptoms,
        );

        assert_eq!(categories(&recs), vec![
            ExerciseCategory::Advanced,
            ExerciseCategory::WeightLoss,
            ExerciseCategory::LowImpact,
        ]);
    }

    #[test]
    fn test_pain_found_after_unrelated_symptoms() {
        let symptoms = [physical("High Blood Pressure"), physical("Nyeri Otot")];
        let recs = generate_exercise_recommendations(
            RuleCatalog::global(),
            &Profile::default(),
            &HealthSnapshot::default(),
            &symptoms,
        );

        assert_eq!(categories(&recs), vec![ExerciseCategory::LowImpact]);
    }

    #[test]
    fn test_overweight_without_activity_level() {
        let recs = generate_exercise_recommendations(
            RuleCatalog::global(),
            &Profile::default(),
            &snapshot(27.5, ""),
            &[],
        );
        assert_eq!(categories(&recs), vec![ExerciseCategory::WeightLoss]);
    }

    #[test]
    fn test_zero_bmi_adds_no_weight_loss_entry() {
        let health: HealthSnapshot = serde_json::from_value(serde_json::json!({
            "bmi": 0.0,
            "weight_kg": 110.0,
            "height_cm": 165.0,
            "activity_level": "light"
        })).unwrap();
        let recs = generate_exercise_recommendations(RuleCatalog::global(), &Profile::default(), &health, &[]);

        assert_eq!(categories(&recs), vec![ExerciseCategory::IntermediateLight]);
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let symptoms = [physical("Joint Pain")];
        let health = snapshot(33.0, "light");
        let first = generate_exercise_recommendations(RuleCatalog::global(), &Profile::default(), &health, &symptoms);
        let second = generate_exercise_recommendations(RuleCatalog::global(), &Profile::default(), &health, &symptoms);

        assert_eq!(
            serde_json::to_vec(&first).unwrap(),
            serde_json::to_vec(&second).unwrap()
        );
    }
}
