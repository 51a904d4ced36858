//! Keyword-driven suggestion engine.
//!
//! Free-text complaints map to canned outcomes by scanning an ordered rule
//! table for the first case-insensitive substring match. Two built-in tables
//! share the machinery: symptom advice for the chatbot, and specialist
//! suggestions for the appointment-intake form.
//!
//! The matcher is pure and allocation-light: rule keywords are lowercased
//! once at table construction, the query once per call. No tokenization, no
//! word boundaries, no stemming. Table order is the only tie-break.

mod matcher;
mod tables;

pub use matcher::{query_from_json, EngineError, MatchResult, Rule, RuleTable};
pub use tables::{
    advice_table, specialist_table, SpecialistSuggestion, GENERIC_ADVICE, SPECIALTIES,
};
