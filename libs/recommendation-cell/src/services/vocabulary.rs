use std::fmt;

use serde::Serialize;

use crate::models::{SymptomCategory, VocabularyEntry};

/// Every symptom name a recommendation rule can trigger on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SymptomName {
    HighBloodPressure,
    Gastritis,
    DigestiveDisorder,
    HighCholesterol,
    PhysicalFatigue,
    EmotionalExhaustion,
    JointPain,
    MusclePain,
    SleepDisorder,
    Burnout,
    SocialLoneliness,
}

impl SymptomName {
    pub const ALL: [SymptomName; 11] = [
        SymptomName::HighBloodPressure,
        SymptomName::Gastritis,
        SymptomName::DigestiveDisorder,
        SymptomName::HighCholesterol,
        SymptomName::PhysicalFatigue,
        SymptomName::EmotionalExhaustion,
        SymptomName::JointPain,
        SymptomName::MusclePain,
        SymptomName::SleepDisorder,
        SymptomName::Burnout,
        SymptomName::SocialLoneliness,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SymptomName::HighBloodPressure => "High Blood Pressure",
            SymptomName::Gastritis => "Gastritis",
            SymptomName::DigestiveDisorder => "Digestive Disorder",
            SymptomName::HighCholesterol => "High Cholesterol",
            SymptomName::PhysicalFatigue => "Physical Fatigue",
            SymptomName::EmotionalExhaustion => "Emotional Exhaustion (Burnout)",
            SymptomName::JointPain => "Joint Pain",
            SymptomName::MusclePain => "Muscle Pain",
            SymptomName::SleepDisorder => "Sleep Disorder",
            SymptomName::Burnout => "Burnout",
            SymptomName::SocialLoneliness => "Social Loneliness",
        }
    }

    /// Name used by the Indonesian symptom templates.
    pub fn localized_label(&self) -> &'static str {
        match self {
            SymptomName::HighBloodPressure => "Tekanan Darah Tinggi",
            SymptomName::Gastritis => "Maag",
            SymptomName::DigestiveDisorder => "Gangguan Pencernaan",
            SymptomName::HighCholesterol => "Kolesterol Tinggi",
            SymptomName::PhysicalFatigue => "Kelelahan Fisik",
            SymptomName::EmotionalExhaustion => "Kelelahan Emosional (Burnout)",
            SymptomName::JointPain => "Nyeri Sendi",
            SymptomName::MusclePain => "Nyeri Otot",
            SymptomName::SleepDisorder => "Gangguan Tidur",
            SymptomName::Burnout => "Burnout",
            SymptomName::SocialLoneliness => "Kesepian Sosial",
        }
    }

    pub fn category(&self) -> SymptomCategory {
        match self {
            SymptomName::HighBloodPressure
            | SymptomName::Gastritis
            | SymptomName::DigestiveDisorder
            | SymptomName::HighCholesterol
            | SymptomName::PhysicalFatigue
            | SymptomName::JointPain
            | SymptomName::MusclePain => SymptomCategory::Physical,
            SymptomName::EmotionalExhaustion
            | SymptomName::SleepDisorder
            | SymptomName::Burnout
            | SymptomName::SocialLoneliness => SymptomCategory::Mental,
        }
    }

    /// Exact match against either label. Anything else is not a trigger.
    pub fn from_label(raw: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|name| name.label() == raw || name.localized_label() == raw)
    }
}

impl fmt::Display for SymptomName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub fn vocabulary() -> Vec<VocabularyEntry> {
    SymptomName::ALL
        .iter()
        .map(|name| VocabularyEntry {
            name: name.label(),
            localized_name: name.localized_label(),
            symptom_type: name.category(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_label_accepts_both_locales() {
        assert_eq!(SymptomName::from_label("High Blood Pressure"), Some(SymptomName::HighBloodPressure));
        assert_eq!(SymptomName::from_label("Tekanan Darah Tinggi"), Some(SymptomName::HighBloodPressure));
        assert_eq!(SymptomName::from_label("Gangguan Tidur"), Some(SymptomName::SleepDisorder));
    }

    #[test]
    fn test_from_label_is_exact() {
        assert_eq!(SymptomName::from_label("high blood pressure"), None);
        assert_eq!(SymptomName::from_label(" Joint Pain"), None);
        assert_eq!(SymptomName::from_label(""), None);
    }

    #[test]
    fn test_burnout_variants_are_distinct() {
        assert_eq!(SymptomName::from_label("Burnout"), Some(SymptomName::Burnout));
        assert_eq!(
            SymptomName::from_label("Kelelahan Emosional (Burnout)"),
            Some(SymptomName::EmotionalExhaustion)
        );
    }

    #[test]
    fn test_vocabulary_lists_every_name() {
        let entries = vocabulary();
        assert_eq!(entries.len(), SymptomName::ALL.len());
        assert_eq!(entries[0].name, "High Blood Pressure");
        assert!(entries.iter().any(|e| e.name == "Social Loneliness" && e.symptom_type == SymptomCategory::Mental));
    }
}
