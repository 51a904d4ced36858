//! Appointment board operations: search, status lifecycle, display formatting.

use std::sync::LazyLock;

use chrono::NaiveDateTime;
use regex::Regex;
use thiserror::Error;

use crate::models::enums::AppointmentStatus;
use crate::models::Appointment;

#[derive(Error, Debug, PartialEq)]
pub enum BoardError {
    #[error("Only scheduled appointments can be cancelled, appointment {id} is {status}")]
    NotCancellable { id: u64, status: &'static str },

    #[error("Invalid appointment time: {0}")]
    InvalidTime(String),
}

// ─── Time normalization ───────────────────────────────────────────────────────

static RE_SECONDS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}$").unwrap());
static RE_MINUTES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}$").unwrap());

/// Normalizes a typed-in time to "yyyy-MM-ddTHH:mm:ss".
/// Minute-precision input (datetime pickers) gains ":00"; longer strings are
/// trimmed to 19 chars as a last resort; empty input is `None`.
pub fn normalize_to_seconds(t: &str) -> Option<String> {
    if t.is_empty() {
        return None;
    }
    if RE_SECONDS.is_match(t) {
        return Some(t.to_string());
    }
    if RE_MINUTES.is_match(t) {
        return Some(format!("{t}:00"));
    }
    Some(t.chars().take(19).collect())
}

/// Parses a typed-in time, normalizing first.
pub fn parse_time(t: &str) -> Result<NaiveDateTime, BoardError> {
    let normalized = normalize_to_seconds(t).ok_or_else(|| BoardError::InvalidTime(t.into()))?;
    NaiveDateTime::parse_from_str(&normalized, "%Y-%m-%dT%H:%M:%S")
        .map_err(|_| BoardError::InvalidTime(t.into()))
}

// ─── Search ───────────────────────────────────────────────────────────────────

/// Case-insensitive substring filter across patient name, doctor name,
/// patient id, and appointment id. A blank query returns everything.
pub fn filter_appointments<'a>(
    appointments: &'a [Appointment],
    query: &str,
) -> Vec<&'a Appointment> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return appointments.iter().collect();
    }
    appointments
        .iter()
        .filter(|a| {
            a.patient
                .as_ref()
                .is_some_and(|p| p.name.to_lowercase().contains(&q))
                || a.doctor_name.to_lowercase().contains(&q)
                || a.patient_id().is_some_and(|id| id.to_string().contains(&q))
                || a.id.to_string().contains(&q)
        })
        .collect()
}

// ─── Status lifecycle ─────────────────────────────────────────────────────────

/// Scheduled appointments whose time has passed become Completed.
/// Returns the ids that changed.
pub fn complete_elapsed(appointments: &mut [Appointment], now: NaiveDateTime) -> Vec<u64> {
    let mut changed = Vec::new();
    for appt in appointments.iter_mut() {
        if appt.status == AppointmentStatus::Scheduled
            && appt.appointment_time.is_some_and(|t| t < now)
        {
            appt.status = AppointmentStatus::Completed;
            changed.push(appt.id);
        }
    }
    if !changed.is_empty() {
        tracing::debug!(count = changed.len(), "elapsed appointments completed");
    }
    changed
}

/// Cancels a scheduled appointment. The board only offers Cancel on
/// Scheduled rows; anything else is rejected.
pub fn cancel(appt: &mut Appointment) -> Result<(), BoardError> {
    if appt.status != AppointmentStatus::Scheduled {
        tracing::warn!(id = appt.id, status = appt.status.as_str(), "cancel rejected");
        return Err(BoardError::NotCancellable {
            id: appt.id,
            status: appt.status.as_str(),
        });
    }
    appt.status = AppointmentStatus::Cancelled;
    Ok(())
}

// ─── Inline edit ──────────────────────────────────────────────────────────────

/// Fields the edit modal may change. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentUpdate {
    pub doctor_name: Option<String>,
    pub appointment_time: Option<String>,
    pub reason: Option<String>,
    pub status: Option<AppointmentStatus>,
}

pub fn apply_update(appt: &mut Appointment, update: AppointmentUpdate) -> Result<(), BoardError> {
    if let Some(t) = update.appointment_time {
        appt.appointment_time = Some(parse_time(&t)?);
    }
    if let Some(doctor_name) = update.doctor_name {
        appt.doctor_name = doctor_name;
    }
    if let Some(reason) = update.reason {
        appt.reason = reason;
    }
    if let Some(status) = update.status {
        appt.status = status;
    }
    Ok(())
}

// ─── Display ──────────────────────────────────────────────────────────────────

/// "Wed, 15 Jan 2026, 02:30 PM". Missing times render as "N/A".
pub fn format_time(t: Option<NaiveDateTime>) -> String {
    match t {
        Some(t) => t.format("%a, %d %b %Y, %I:%M %p").to_string(),
        None => "N/A".to_string(),
    }
}

/// Most recent appointments by time, descending; missing times sort last.
pub fn recent(appointments: &[Appointment], n: usize) -> Vec<Appointment> {
    let mut sorted = appointments.to_vec();
    sorted.sort_by(|a, b| b.appointment_time.cmp(&a.appointment_time));
    sorted.truncate(n);
    sorted
}
