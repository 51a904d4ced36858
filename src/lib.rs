//! Clinara: in-process core of a clinic appointment and patient-management
//! tool.
//!
//! The center is a keyword-driven suggestion engine shared by the offline
//! chatbot (symptom advice) and the appointment-intake form (specialist
//! suggestion). Around it: appointment board operations, dashboard
//! statistics, and CSV/PDF report export. No persistence, no network;
//! screen-facing collaborators call this crate in-process.

pub mod board;
pub mod chat;
pub mod config;
pub mod engine;
pub mod intake;
pub mod models;
pub mod report;
pub mod stats;

use std::io::{self, BufRead, Write};

use tracing_subscriber::EnvFilter;

/// Entry point for the demo binary: tracing init plus an interactive
/// chatbot loop over stdin.
pub fn run() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut session = chat::ChatSession::new();

    writeln!(stdout, "{} health chatbot (offline mode)", config::APP_NAME)?;
    writeln!(stdout, "{}", chat::CHAT_DISCLAIMER)?;
    writeln!(stdout, "Type your health problem, or \"quit\" to exit.")?;

    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim_end();
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            break;
        }
        if let Some(reply) = session.send(line) {
            writeln!(stdout, "bot: {}", reply.text)?;
        }
    }

    Ok(())
}
