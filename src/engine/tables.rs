use std::fmt;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use super::matcher::RuleTable;

/// Fallback reply when no advice rule matches.
pub const GENERIC_ADVICE: &str =
    "I'm not a doctor, but please consult a physician for proper guidance.";

/// Specialty options offered when no suggestion fires and the field is
/// left for manual choice.
pub const SPECIALTIES: &[&str] = &[
    "General Physician",
    "Pulmonologist",
    "Cardiologist",
    "Dentist",
    "Dermatologist",
    "Other",
];

/// A suggested doctor: specialty plus roster name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialistSuggestion {
    pub specialty: String,
    pub doctor_name: String,
}

impl SpecialistSuggestion {
    fn new(specialty: &str, doctor_name: &str) -> Self {
        Self {
            specialty: specialty.into(),
            doctor_name: doctor_name.into(),
        }
    }
}

impl fmt::Display for SpecialistSuggestion {
    /// Renders the way the intake form pre-fills the doctor field.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.specialty, self.doctor_name)
    }
}

// ─── Built-in tables ──────────────────────────────────────────────────────────
//
// Both tables are constructed once and shared; they are immutable after
// construction and safe to read from any number of threads.

/// Symptom keyword → advice string, for the chatbot. Related keywords map to
/// a shared advice string. Cough-family rules precede the fever rule, so a
/// complaint naming both gets the cough advice.
static ADVICE: LazyLock<RuleTable<String>> = LazyLock::new(|| {
    RuleTable::from_pairs([
        (
            "cough",
            "Cold and cough: drink warm fluids, try steam inhalation and honey-ginger tea. See a doctor if it lasts more than a week.".to_string(),
        ),
        (
            "cold",
            "Cold and cough: drink warm fluids, try steam inhalation and honey-ginger tea. See a doctor if it lasts more than a week.".to_string(),
        ),
        (
            "fever",
            "Fever: drink fluids, rest, and take paracetamol if needed, following the dosage. See a doctor if it persists beyond 48 hours.".to_string(),
        ),
        (
            "high bp",
            "High blood pressure: reduce salt, exercise, manage stress, take prescribed medication, and consult your physician.".to_string(),
        ),
        (
            "hypertension",
            "High blood pressure: reduce salt, exercise, manage stress, take prescribed medication, and consult your physician.".to_string(),
        ),
        (
            "low bp",
            "Low blood pressure: drink fluids, add some salt to food, avoid standing for long periods, and consult a doctor if it happens often.".to_string(),
        ),
        (
            "hypotension",
            "Low blood pressure: drink fluids, add some salt to food, avoid standing for long periods, and consult a doctor if it happens often.".to_string(),
        ),
        (
            "headache",
            "Headache: rest, drink water, avoid stress, and take paracetamol if needed. See a doctor if it is severe.".to_string(),
        ),
        (
            "stomach",
            "Stomach pain: drink warm water, eat light food, and avoid spicy meals. See a doctor if it persists.".to_string(),
        ),
        (
            "abdominal pain",
            "Stomach pain: drink warm water, eat light food, and avoid spicy meals. See a doctor if it persists.".to_string(),
        ),
        (
            "skin",
            "Skin problem: keep the area clean and apply a moisturizer or soothing cream. Consult a dermatologist if it is severe.".to_string(),
        ),
        (
            "rash",
            "Skin problem: keep the area clean and apply a moisturizer or soothing cream. Consult a dermatologist if it is severe.".to_string(),
        ),
        (
            "diabetes",
            "Diabetes: eat a low-sugar diet, exercise, take your medicines regularly, and monitor sugar levels.".to_string(),
        ),
        (
            "sugar",
            "Diabetes: eat a low-sugar diet, exercise, take your medicines regularly, and monitor sugar levels.".to_string(),
        ),
        (
            "kidney stone",
            "Kidney stone: drink plenty of water, avoid salty food, and consult a doctor about pain relief and a scan.".to_string(),
        ),
        (
            "back pain",
            "Back pain: rest, maintain posture, apply a warm compress, and do light stretching. See a doctor if it is chronic.".to_string(),
        ),
        (
            "weakness",
            "Weakness: eat a balanced diet, stay hydrated, and sleep well. Consult a doctor if it is persistent.".to_string(),
        ),
        (
            "tired",
            "Weakness: eat a balanced diet, stay hydrated, and sleep well. Consult a doctor if it is persistent.".to_string(),
        ),
    ])
    .expect("advice rule literals are non-empty")
});

/// Symptom keyword → suggested doctor, for the intake form.
static SPECIALIST: LazyLock<RuleTable<SpecialistSuggestion>> = LazyLock::new(|| {
    RuleTable::from_pairs([
        ("cough", SpecialistSuggestion::new("Pulmonologist", "Dr. Khushal Sharma")),
        ("breath", SpecialistSuggestion::new("Pulmonologist", "Dr. Khushal Sharma")),
        ("heart", SpecialistSuggestion::new("Cardiologist", "Dr. Bruce Banner")),
        ("fever", SpecialistSuggestion::new("General Physician", "Dr. Elon Musk")),
        ("tooth", SpecialistSuggestion::new("Dentist", "Dr. Strange")),
        ("skin", SpecialistSuggestion::new("Dermatologist", "Dr. Tony Stark")),
    ])
    .expect("specialist rule literals are non-empty")
});

pub fn advice_table() -> &'static RuleTable<String> {
    &ADVICE
}

pub fn specialist_table() -> &'static RuleTable<SpecialistSuggestion> {
    &SPECIALIST
}
