use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::enums::AppointmentStatus;
use super::Patient;

/// A booked appointment. The patient is embedded the way the board renders
/// it; a missing patient displays as "Unknown".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: u64,
    pub patient: Option<Patient>,
    pub doctor_name: String,
    /// Second precision. Absent times render as "N/A".
    pub appointment_time: Option<NaiveDateTime>,
    pub reason: String,
    pub status: AppointmentStatus,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

impl Appointment {
    pub fn patient_name(&self) -> &str {
        self.patient.as_ref().map_or("Unknown", |p| p.name.as_str())
    }

    pub fn patient_id(&self) -> Option<u64> {
        self.patient.as_ref().map(|p| p.id)
    }
}
