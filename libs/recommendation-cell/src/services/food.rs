use std::collections::HashSet;

use tracing::debug;

use crate::models::{BmiCategory, FoodRecommendation, HealthSnapshot, SymptomEntry};
use crate::services::bmi::classify;
use crate::services::catalog::RuleCatalog;
use crate::services::vocabulary::SymptomName;

/// Distinct recognised symptom names in `symptoms`. Presence only.
pub fn symptom_set(symptoms: &[SymptomEntry]) -> HashSet<SymptomName> {
    symptoms
        .iter()
        .filter_map(|entry| SymptomName::from_label(&entry.symptom_name))
        .collect()
}

/// BMI entry first, then symptom-triggered entries in rule order.
pub fn generate_food_recommendations(
    catalog: &RuleCatalog,
    health: &HealthSnapshot,
    symptoms: &[SymptomEntry],
) -> Vec<FoodRecommendation> {
    let mut recommendations = Vec::new();

    let bmi_category = classify(health.bmi);
    match bmi_category {
        BmiCategory::Underweight => recommendations.push(catalog.food_weight_gain().clone()),
        BmiCategory::Overweight | BmiCategory::Obese => {
            recommendations.push(catalog.food_weight_loss().clone())
        }
        BmiCategory::Normal => recommendations.push(catalog.food_maintenance().clone()),
        BmiCategory::Unclassified => {}
    }

    let present = symptom_set(symptoms);
    for rule in catalog.food_triggers() {
        if rule.triggers.iter().any(|name| present.contains(name)) {
            recommendations.push(rule.recommendation.clone());
        }
    }

    debug!(
        "Food rules: bmi category {}, {} recognised symptoms, {} recommendations",
        bmi_category,
        present.len(),
        recommendations.len()
    );

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FoodCategory, SymptomCategory};

    fn snapshot(bmi: f64) -> HealthSnapshot {
        HealthSnapshot {
            bmi,
            ..Default::default()
        }
    }

    fn physical(name: &str) -> SymptomEntry {
        SymptomEntry::new(name, SymptomCategory::Physical)
    }

    fn categories(recs: &[FoodRecommendation]) -> Vec<FoodCategory> {
        recs.iter().map(|r| r.category).collect()
    }

    #[test]
    fn test_obese_with_high_blood_pressure() {
        let recs = generate_food_recommendations(
            RuleCatalog::global(),
            &snapshot(30.0),
            &[physical("High Blood Pressure")],
        );

        assert_eq!(categories(&recs), vec![FoodCategory::WeightLoss, FoodCategory::BloodPressure]);
    }

    #[test]
    fn test_normal_bmi_without_symptoms() {
        let recs = generate_food_recommendations(RuleCatalog::global(), &snapshot(22.0), &[]);

        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].category, FoodCategory::Maintenance);
    }

    #[test]
    fn test_underweight_gets_weight_gain() {
        let recs = generate_food_recommendations(RuleCatalog::global(), &snapshot(17.0), &[]);
        assert_eq!(categories(&recs), vec![FoodCategory::WeightGain]);
    }

    #[test]
    fn test_missing_snapshot_skips_bmi_rule() {
        let recs = generate_food_recommendations(
            RuleCatalog::global(),
            &HealthSnapshot::default(),
            &[physical("High Cholesterol")],
        );

        assert_eq!(categories(&recs), vec![FoodCategory::Cholesterol]);
    }

    #[test]
    fn test_missing_snapshot_and_symptoms_yields_nothing() {
        let recs = generate_food_recommendations(RuleCatalog::global(), &HealthSnapshot::default(), &[]);
        assert!(recs.is_empty());
    }

    #[test]
    fn test_rule_order_ignores_symptom_order() {
        let symptoms = [
            physical("Physical Fatigue"),
            physical("High Cholesterol"),
            physical("Gastritis"),
            physical("High Blood Pressure"),
        ];
        let recs = generate_food_recommendations(RuleCatalog::global(), &snapshot(26.0), &symptoms);

        assert_eq!(categories(&recs), vec![
            FoodCategory::WeightLoss,
            FoodCategory::BloodPressure,
            FoodCategory::Digestive,
            FoodCategory::Cholesterol,
            FoodCategory::Energy,
        ]);
    }

    #[test]
    fn test_alternate_triggers_emit_once() {
        let symptoms = [
            physical("Gastritis"),
            physical("Digestive Disorder"),
            physical("Gastritis"),
            SymptomEntry::new("Emotional Exhaustion (Burnout)", SymptomCategory::Mental),
            physical("Physical Fatigue"),
        ];
        let recs = generate_food_recommendations(RuleCatalog::global(), &snapshot(22.0), &symptoms);

        assert_eq!(categories(&recs), vec![
            FoodCategory::Maintenance,
            FoodCategory::Digestive,
            FoodCategory::Energy,
        ]);
    }

    #[test]
    fn test_indonesian_symptom_names_trigger() {
        let recs = generate_food_recommendations(
            RuleCatalog::global(),
            &snapshot(22.0),
            &[physical("Tekanan Darah Tinggi"), physical("Maag")],
        );

        assert_eq!(categories(&recs), vec![
            FoodCategory::Maintenance,
            FoodCategory::BloodPressure,
            FoodCategory::Digestive,
        ]);
    }

    #[test]
    fn test_unknown_symptom_names_ignored() {
        let recs = generate_food_recommendations(
            RuleCatalog::global(),
            &snapshot(22.0),
            &[physical("high blood pressure"), physical("Headache")],
        );

        assert_eq!(categories(&recs), vec![FoodCategory::Maintenance]);
    }

    #[test]
    fn test_zero_bmi_ignores_weight_and_height_columns() {
        let health: HealthSnapshot = serde_json::from_value(serde_json::json!({
            "bmi": 0.0,
            "weight_kg": 95.0,
            "height_cm": 170.0,
            "activity_level": "moderate"
        })).unwrap();
        let recs = generate_food_recommendations(RuleCatalog::global(), &health, &[]);

        assert!(recs.is_empty());
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let symptoms = [physical("High Blood Pressure"), physical("Maag")];
        let first = generate_food_recommendations(RuleCatalog::global(), &snapshot(31.0), &symptoms);
        let second = generate_food_recommendations(RuleCatalog::global(), &snapshot(31.0), &symptoms);

        assert_eq!(
            serde_json::to_vec(&first).unwrap(),
            serde_json::to_vec(&second).unwrap()
        );
    }
}
