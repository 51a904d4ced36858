//! Dashboard statistics: pure aggregation over in-memory patients and
//! appointments, plus the derived attention alerts.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::models::enums::AppointmentStatus;
use crate::models::{Appointment, Patient};

/// A doctor with more appointments than this trips an alert.
pub const DOCTOR_OVERLOAD_THRESHOLD: u64 = 20;
/// Cancelled share of all appointments, in percent, above which an alert fires.
pub const CANCELLATION_RATE_THRESHOLD: f64 = 30.0;

// ─── Types ────────────────────────────────────────────────────────────────────

/// One named count in an ordered breakdown list. Presentation order matters,
/// so breakdowns are vectors, not maps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountEntry {
    pub name: String,
    pub count: u64,
}

impl CountEntry {
    fn new(name: impl Into<String>, count: u64) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_patients: u64,
    pub total_appointments: u64,
    /// Scheduled appointments strictly after `now`.
    pub upcoming_appointments: u64,
    pub today_appointments: u64,
    pub today_completed: u64,
    pub today_pending: u64,
    /// Status name ascending.
    pub status_breakdown: Vec<CountEntry>,
    /// Count descending, then doctor name ascending.
    pub appointments_per_doctor: Vec<CountEntry>,
    /// Date ascending, "yyyy-MM-dd" keys.
    pub appointments_per_day: Vec<CountEntry>,
}

// ─── Aggregation ──────────────────────────────────────────────────────────────

pub fn compute(
    patients: &[Patient],
    appointments: &[Appointment],
    now: NaiveDateTime,
) -> DashboardStats {
    let today = now.date();

    let upcoming = appointments
        .iter()
        .filter(|a| {
            a.status == AppointmentStatus::Scheduled
                && a.appointment_time.is_some_and(|t| t > now)
        })
        .count() as u64;

    let todays: Vec<&Appointment> = appointments
        .iter()
        .filter(|a| a.appointment_time.is_some_and(|t| t.date() == today))
        .collect();
    let today_completed = todays
        .iter()
        .filter(|a| a.status == AppointmentStatus::Completed)
        .count() as u64;
    let today_pending = todays
        .iter()
        .filter(|a| a.status == AppointmentStatus::Scheduled)
        .count() as u64;

    let mut by_status: BTreeMap<&str, u64> = BTreeMap::new();
    let mut by_doctor: BTreeMap<String, u64> = BTreeMap::new();
    let mut by_day: BTreeMap<String, u64> = BTreeMap::new();
    for a in appointments {
        *by_status.entry(a.status.as_str()).or_default() += 1;

        let doctor = if a.doctor_name.trim().is_empty() {
            "Unknown".to_string()
        } else {
            a.doctor_name.clone()
        };
        *by_doctor.entry(doctor).or_default() += 1;

        if let Some(t) = a.appointment_time {
            *by_day.entry(t.date().to_string()).or_default() += 1;
        }
    }

    // BTreeMap iteration gives status and day keys ascending; doctors are
    // re-sorted by count descending, name as the tie-break.
    let mut appointments_per_doctor: Vec<CountEntry> = by_doctor
        .into_iter()
        .map(|(name, count)| CountEntry { name, count })
        .collect();
    appointments_per_doctor.sort_by(|a, b| b.count.cmp(&a.count).then(a.name.cmp(&b.name)));

    DashboardStats {
        total_patients: patients.len() as u64,
        total_appointments: appointments.len() as u64,
        upcoming_appointments: upcoming,
        today_appointments: todays.len() as u64,
        today_completed,
        today_pending,
        status_breakdown: by_status
            .into_iter()
            .map(|(name, count)| CountEntry::new(name, count))
            .collect(),
        appointments_per_doctor,
        appointments_per_day: by_day
            .into_iter()
            .map(|(name, count)| CountEntry { name, count })
            .collect(),
    }
}

// ─── Alerts ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DashboardAlert {
    OverloadedDoctors { doctors: Vec<String> },
    HighCancellationRate { percent: f64 },
}

impl DashboardAlert {
    pub fn message(&self) -> String {
        match self {
            Self::OverloadedDoctors { doctors } => format!(
                "Some doctors have more than {} appointments: {}.",
                DOCTOR_OVERLOAD_THRESHOLD,
                doctors.join(", ")
            ),
            Self::HighCancellationRate { percent } => format!(
                "Cancellation rate is high ({percent:.1}%), please investigate."
            ),
        }
    }
}

/// Derives attention alerts from a computed snapshot.
pub fn alerts(stats: &DashboardStats) -> Vec<DashboardAlert> {
    let mut out = Vec::new();

    let overloaded: Vec<String> = stats
        .appointments_per_doctor
        .iter()
        .filter(|e| e.count > DOCTOR_OVERLOAD_THRESHOLD)
        .map(|e| e.name.clone())
        .collect();
    if !overloaded.is_empty() {
        out.push(DashboardAlert::OverloadedDoctors {
            doctors: overloaded,
        });
    }

    let total: u64 = stats.status_breakdown.iter().map(|e| e.count).sum();
    let cancelled = stats
        .status_breakdown
        .iter()
        .find(|e| e.name == "CANCELLED")
        .map_or(0, |e| e.count);
    if total > 0 {
        let percent = cancelled as f64 / total as f64 * 100.0;
        if percent > CANCELLATION_RATE_THRESHOLD {
            out.push(DashboardAlert::HighCancellationRate { percent });
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(day: u32, hour: u32) -> Option<NaiveDateTime> {
        NaiveDate::from_ymd_opt(2026, 1, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
    }

    fn appt(
        id: u64,
        doctor: &str,
        time: Option<NaiveDateTime>,
        status: AppointmentStatus,
    ) -> Appointment {
        Appointment {
            id,
            patient: None,
            doctor_name: doctor.into(),
            appointment_time: time,
            reason: "checkup".into(),
            status,
            created_at: None,
        }
    }

    fn one_patient() -> Vec<Patient> {
        vec![Patient {
            id: 1,
            name: "Asha Verma".into(),
            age: 34,
            email: "asha@example.com".into(),
            phone: "9876543210".into(),
            medical_history: "none noted".into(),
        }]
    }

    #[test]
    fn totals_and_upcoming() {
        let now = at(20, 12).unwrap();
        let appts = vec![
            appt(1, "Dr. A", at(25, 9), AppointmentStatus::Scheduled), // upcoming
            appt(2, "Dr. A", at(10, 9), AppointmentStatus::Completed), // past
            appt(3, "Dr. B", at(25, 9), AppointmentStatus::Cancelled), // future, not scheduled
            appt(4, "Dr. B", None, AppointmentStatus::Scheduled),      // no time
        ];
        let stats = compute(&one_patient(), &appts, now);
        assert_eq!(stats.total_patients, 1);
        assert_eq!(stats.total_appointments, 4);
        assert_eq!(stats.upcoming_appointments, 1);
    }

    #[test]
    fn today_counts() {
        let now = at(20, 12).unwrap();
        let appts = vec![
            appt(1, "Dr. A", at(20, 9), AppointmentStatus::Completed),
            appt(2, "Dr. A", at(20, 15), AppointmentStatus::Scheduled),
            appt(3, "Dr. A", at(20, 17), AppointmentStatus::Cancelled),
            appt(4, "Dr. A", at(21, 9), AppointmentStatus::Scheduled),
        ];
        let stats = compute(&[], &appts, now);
        assert_eq!(stats.today_appointments, 3);
        assert_eq!(stats.today_completed, 1);
        assert_eq!(stats.today_pending, 1);
    }

    #[test]
    fn status_breakdown_sorted_by_name() {
        let appts = vec![
            appt(1, "Dr. A", at(10, 9), AppointmentStatus::Scheduled),
            appt(2, "Dr. A", at(11, 9), AppointmentStatus::Cancelled),
            appt(3, "Dr. A", at(12, 9), AppointmentStatus::Completed),
            appt(4, "Dr. A", at(13, 9), AppointmentStatus::Cancelled),
        ];
        let stats = compute(&[], &appts, at(20, 12).unwrap());
        assert_eq!(
            stats.status_breakdown,
            [
                CountEntry::new("CANCELLED", 2),
                CountEntry::new("COMPLETED", 1),
                CountEntry::new("SCHEDULED", 1),
            ]
        );
    }

    #[test]
    fn doctors_sorted_by_count_desc_then_name() {
        let appts = vec![
            appt(1, "Dr. B", at(10, 9), AppointmentStatus::Scheduled),
            appt(2, "Dr. B", at(11, 9), AppointmentStatus::Scheduled),
            appt(3, "Dr. A", at(12, 9), AppointmentStatus::Scheduled),
            appt(4, "Dr. C", at(13, 9), AppointmentStatus::Scheduled),
            appt(5, "", at(14, 9), AppointmentStatus::Scheduled),
        ];
        let stats = compute(&[], &appts, at(20, 12).unwrap());
        assert_eq!(
            stats.appointments_per_doctor,
            [
                CountEntry::new("Dr. B", 2),
                CountEntry::new("Dr. A", 1),
                CountEntry::new("Dr. C", 1),
                CountEntry::new("Unknown", 1),
            ]
        );
    }

    #[test]
    fn per_day_sorted_ascending_skips_missing_times() {
        let appts = vec![
            appt(1, "Dr. A", at(15, 9), AppointmentStatus::Scheduled),
            appt(2, "Dr. A", at(10, 9), AppointmentStatus::Scheduled),
            appt(3, "Dr. A", at(15, 17), AppointmentStatus::Scheduled),
            appt(4, "Dr. A", None, AppointmentStatus::Scheduled),
        ];
        let stats = compute(&[], &appts, at(20, 12).unwrap());
        assert_eq!(
            stats.appointments_per_day,
            [
                CountEntry::new("2026-01-10", 1),
                CountEntry::new("2026-01-15", 2),
            ]
        );
    }

    // ── Alerts ──

    #[test]
    fn no_alerts_on_quiet_dashboard() {
        let appts = vec![appt(1, "Dr. A", at(10, 9), AppointmentStatus::Scheduled)];
        let stats = compute(&[], &appts, at(20, 12).unwrap());
        assert!(alerts(&stats).is_empty());
    }

    #[test]
    fn overload_fires_strictly_above_threshold() {
        let mut appts: Vec<Appointment> = (0..20)
            .map(|i| appt(i, "Dr. Busy", at(10, 9), AppointmentStatus::Scheduled))
            .collect();
        let stats = compute(&[], &appts, at(20, 12).unwrap());
        assert!(alerts(&stats).is_empty(), "exactly 20 is not an overload");

        appts.push(appt(20, "Dr. Busy", at(10, 10), AppointmentStatus::Scheduled));
        let stats = compute(&[], &appts, at(20, 12).unwrap());
        let fired = alerts(&stats);
        assert_eq!(
            fired,
            [DashboardAlert::OverloadedDoctors {
                doctors: vec!["Dr. Busy".into()],
            }]
        );
        assert!(fired[0].message().contains("Dr. Busy"));
    }

    #[test]
    fn cancellation_rate_fires_strictly_above_threshold() {
        // 3 of 10 cancelled = 30.0%, not above the threshold.
        let mut appts: Vec<Appointment> = (0..7)
            .map(|i| appt(i, "Dr. A", at(10, 9), AppointmentStatus::Scheduled))
            .collect();
        appts.extend((7..10).map(|i| appt(i, "Dr. A", at(10, 9), AppointmentStatus::Cancelled)));
        let stats = compute(&[], &appts, at(20, 12).unwrap());
        assert!(alerts(&stats).is_empty());

        // 4 of 10 cancelled = 40%.
        appts[0].status = AppointmentStatus::Cancelled;
        let stats = compute(&[], &appts, at(20, 12).unwrap());
        match &alerts(&stats)[..] {
            [DashboardAlert::HighCancellationRate { percent }] => {
                assert!((percent - 40.0).abs() < f64::EPSILON);
            }
            other => panic!("unexpected alerts: {other:?}"),
        }
    }

    #[test]
    fn alerts_on_empty_dashboard_are_empty() {
        let stats = compute(&[], &[], at(20, 12).unwrap());
        assert!(alerts(&stats).is_empty());
    }
}
