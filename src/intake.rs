//! Appointment intake: reason pre-fill, specialist suggestion, and draft
//! validation.
//!
//! Selecting a patient pre-fills the reason field with a verbatim copy of
//! the medical history (a separate behavior from the suggestion engine) and
//! runs the history through the specialist table. On a match the doctor
//! field is pre-filled; otherwise the field stays editable behind a
//! "choose manually" prompt.

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::board::{self, BoardError};
use crate::engine::{specialist_table, MatchResult, SpecialistSuggestion};
use crate::models::enums::AppointmentStatus;
use crate::models::{Appointment, ModelError, Patient};

// ─── Pre-fill ─────────────────────────────────────────────────────────────────

/// Suggested-doctor state surfaced next to the doctor field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DoctorSuggestion {
    Suggested(SpecialistSuggestion),
    ChooseManually,
}

impl DoctorSuggestion {
    /// Text shown in the suggestion banner.
    pub fn prompt(&self) -> String {
        match self {
            Self::Suggested(s) => s.to_string(),
            Self::ChooseManually => "No specific suggestion, choose manually".to_string(),
        }
    }

    /// Value the doctor field is pre-filled with, if any.
    pub fn prefill_value(&self) -> Option<String> {
        match self {
            Self::Suggested(s) => Some(s.to_string()),
            Self::ChooseManually => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntakePrefill {
    /// Verbatim copy of the source history field.
    pub reason: String,
    pub doctor: DoctorSuggestion,
}

pub fn prefill_from_history(history: &str) -> IntakePrefill {
    let doctor = match specialist_table().evaluate(history) {
        MatchResult::Matched(s) => DoctorSuggestion::Suggested(s.clone()),
        MatchResult::NoMatch => DoctorSuggestion::ChooseManually,
    };
    tracing::debug!(matched = matches!(doctor, DoctorSuggestion::Suggested(_)), "intake prefill");
    IntakePrefill {
        reason: history.to_string(),
        doctor,
    }
}

/// Pre-fill runs only when the selected patient has a history on record.
pub fn prefill_from_patient(patient: &Patient) -> Option<IntakePrefill> {
    if patient.medical_history.trim().is_empty() {
        return None;
    }
    Some(prefill_from_history(&patient.medical_history))
}

// ─── Draft validation ─────────────────────────────────────────────────────────

/// Form state as submitted: time at minute precision as typed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentDraft {
    pub patient_id: Option<u64>,
    pub doctor_name: String,
    pub appointment_time: String,
    pub reason: String,
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum DraftError {
    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Board(#[from] BoardError),

    #[error("Draft names patient {expected} but was given patient {got}")]
    PatientMismatch { expected: u64, got: u64 },
}

impl AppointmentDraft {
    /// Checks every required field without building anything.
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.patient_id.is_none() {
            return Err(ModelError::MissingField("patientId").into());
        }
        if self.doctor_name.trim().is_empty() {
            return Err(ModelError::MissingField("doctorName").into());
        }
        if self.reason.trim().is_empty() {
            return Err(ModelError::MissingField("reason").into());
        }
        board::parse_time(&self.appointment_time)?;
        Ok(())
    }

    /// Builds a Scheduled appointment from a valid draft. The caller resolves
    /// the patient record; the draft only carries the id.
    pub fn into_appointment(self, id: u64, patient: Patient) -> Result<Appointment, DraftError> {
        self.validate()?;
        let expected = self.patient_id.unwrap_or_default();
        if expected != patient.id {
            return Err(DraftError::PatientMismatch {
                expected,
                got: patient.id,
            });
        }
        let time = board::parse_time(&self.appointment_time)?;
        Ok(Appointment {
            id,
            patient: Some(patient),
            doctor_name: self.doctor_name,
            appointment_time: Some(time),
            reason: self.reason,
            status: AppointmentStatus::Scheduled,
            created_at: Some(Local::now().naive_local()),
        })
    }
}
