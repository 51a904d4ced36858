//! Dashboard report export: CSV and PDF renderings of a stats snapshot
//! plus the recent-appointments list.
//!
//! PDF generation via `printpdf` (builtin fonts, word-wrapped lines). The
//! CSV mirrors the on-screen layout: summary metrics, a separator, then one
//! row per recent appointment.

use std::io::BufWriter;
use std::path::{Path, PathBuf};

use printpdf::*;
use thiserror::Error;

use crate::board;
use crate::models::Appointment;
use crate::stats::DashboardStats;

pub const REPORT_TITLE: &str = "Clinara Dashboard Report";
pub const CSV_FILENAME: &str = "dashboard_report.csv";
pub const PDF_FILENAME: &str = "dashboard_report.pdf";

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("PDF rendering failed: {0}")]
    Pdf(String),

    #[error("Export failed: {0}")]
    Io(#[from] std::io::Error),
}

// ─── CSV ──────────────────────────────────────────────────────────────────────

/// Renders the dashboard report as CSV text.
pub fn dashboard_csv(stats: &DashboardStats, recent: &[Appointment]) -> String {
    let mut rows: Vec<Vec<String>> = vec![
        vec!["Metric".into(), "Value".into()],
        vec!["Total Patients".into(), stats.total_patients.to_string()],
        vec![
            "Total Appointments".into(),
            stats.total_appointments.to_string(),
        ],
        vec![
            "Upcoming Appointments".into(),
            stats.upcoming_appointments.to_string(),
        ],
        vec!["--- Recent Appointments ---".into(), String::new()],
        vec![
            "Patient".into(),
            "Doctor".into(),
            "Date/Time".into(),
            "Status".into(),
        ],
    ];
    for a in recent {
        rows.push(vec![
            a.patient_name().to_string(),
            a.doctor_name.clone(),
            board::format_time(a.appointment_time),
            a.status.as_str().to_string(),
        ]);
    }

    rows.iter()
        .map(|row| {
            row.iter()
                .map(|field| csv_field(field))
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Quotes a field when it contains a comma, quote, or newline.
fn csv_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

// ─── PDF ──────────────────────────────────────────────────────────────────────

/// Renders the dashboard report as PDF bytes.
pub fn dashboard_pdf(
    stats: &DashboardStats,
    recent: &[Appointment],
) -> Result<Vec<u8>, ReportError> {
    let (doc, page1, layer1) = PdfDocument::new(REPORT_TITLE, Mm(210.0), Mm(297.0), "Layer 1");
    let layer = doc.get_page(page1).get_layer(layer1);
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ReportError::Pdf(format!("font error: {e}")))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| ReportError::Pdf(format!("font error: {e}")))?;
    let courier = doc
        .add_builtin_font(BuiltinFont::Courier)
        .map_err(|e| ReportError::Pdf(format!("font error: {e}")))?;

    let mut y = Mm(280.0);

    // Title
    layer.use_text(REPORT_TITLE, 14.0, Mm(20.0), y, &bold);
    y -= Mm(10.0);

    // Summary metrics
    layer.use_text("SUMMARY:", 11.0, Mm(20.0), y, &bold);
    y -= Mm(6.0);
    for (metric, value) in [
        ("Total Patients", stats.total_patients),
        ("Total Appointments", stats.total_appointments),
        ("Upcoming Appointments", stats.upcoming_appointments),
    ] {
        let text = format!("  {metric}: {value}");
        layer.use_text(&text, 9.0, Mm(25.0), y, &font);
        y -= Mm(4.5);
    }
    y -= Mm(4.0);

    // Recent appointments
    layer.use_text("RECENT APPOINTMENTS:", 11.0, Mm(20.0), y, &bold);
    y -= Mm(6.0);
    if recent.is_empty() {
        layer.use_text("  No appointments found", 9.0, Mm(25.0), y, &font);
        y -= Mm(4.5);
    }
    for a in recent {
        let text = format!(
            "  {} | {} | {} | {}",
            a.patient_name(),
            a.doctor_name,
            board::format_time(a.appointment_time),
            a.status.label(),
        );
        for line in wrap_text(&text, 90) {
            layer.use_text(&line, 8.0, Mm(25.0), y, &courier);
            y -= Mm(4.0);
        }
        y -= Mm(1.0);
    }

    let mut buf = BufWriter::new(Vec::new());
    doc.save(&mut buf)
        .map_err(|e| ReportError::Pdf(format!("save error: {e}")))?;
    buf.into_inner()
        .map_err(|e| ReportError::Pdf(format!("buffer error: {e}")))
}

/// Simple word-wrap helper for PDF text rendering.
fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.len() + word.len() + 1 > max_chars && !current.is_empty() {
            lines.push(current.clone());
            current.clear();
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

// ─── File export ──────────────────────────────────────────────────────────────

/// Writes report bytes into an exports directory, creating it as needed.
pub fn export_to_file(
    bytes: &[u8],
    filename: &str,
    exports_dir: &Path,
) -> Result<PathBuf, ReportError> {
    std::fs::create_dir_all(exports_dir)?;
    let path = exports_dir.join(filename);
    std::fs::write(&path, bytes)?;
    tracing::info!(path = %path.display(), "report exported");
    Ok(path)
}
