use tracing::debug;

use crate::models::{EmotionalRecommendation, EmotionalState, SymptomEntry};
use crate::services::catalog::RuleCatalog;
use crate::services::vocabulary::SymptomName;

/// Emotional-state entry first, then one entry per distinct tag triggered by
/// the mental symptoms, in scan order.
pub fn generate_emotional_recommendations(
    catalog: &RuleCatalog,
    emotional_state: &str,
    mental_symptoms: &[SymptomEntry],
) -> Vec<EmotionalRecommendation> {
    let mut recommendations: Vec<EmotionalRecommendation> = Vec::new();

    let state = EmotionalState::parse(emotional_state);
    if let Some(rec) = state.and_then(|state| catalog.emotional_for_state(state)) {
        recommendations.push(rec.clone());
    }

    for entry in mental_symptoms {
        let Some(rec) = SymptomName::from_label(&entry.symptom_name)
            .and_then(|name| catalog.emotional_for_symptom(name))
        else {
            continue;
        };

        let already_added = recommendations
            .iter()
            .any(|existing| existing.emotional_state == rec.emotional_state);
        if !already_added {
            recommendations.push(rec.clone());
        }
    }

    debug!(
        "Emotional rules: state {:?}, {} mental symptoms, {} recommendations",
        state,
        mental_symptoms.len(),
        recommendations.len()
    );

    recommendations
}
