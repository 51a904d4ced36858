use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum EngineError {
    #[error("Rule keyword must not be empty")]
    EmptyKeyword,

    #[error("Query must be text, got {got}")]
    NotText { got: &'static str },
}

// ─── Rule & RuleTable ─────────────────────────────────────────────────────────

/// A single (keyword, outcome) classification rule. Immutable once built;
/// the keyword is trimmed and lowercased here, exactly once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rule<O> {
    keyword: String,
    outcome: O,
}

impl<O> Rule<O> {
    pub fn new(keyword: &str, outcome: O) -> Result<Self, EngineError> {
        let keyword = keyword.trim().to_lowercase();
        if keyword.is_empty() {
            return Err(EngineError::EmptyKeyword);
        }
        Ok(Self { keyword, outcome })
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn outcome(&self) -> &O {
        &self.outcome
    }
}

/// An ordered, immutable collection of rules. Order determines precedence:
/// the first rule whose keyword the query contains wins, regardless of where
/// the keyword occurs in the query text itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleTable<O> {
    rules: Vec<Rule<O>>,
}

impl<O> RuleTable<O> {
    pub fn new(rules: Vec<Rule<O>>) -> Self {
        Self { rules }
    }

    /// Builds a table from (keyword, outcome) pairs, preserving order.
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self, EngineError>
    where
        I: IntoIterator<Item = (&'a str, O)>,
    {
        let rules = pairs
            .into_iter()
            .map(|(keyword, outcome)| Rule::new(keyword, outcome))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rules })
    }

    pub fn rules(&self) -> &[Rule<O>] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Applies the table to a query: lowercase the query, then return the
    /// outcome of the first rule (in table order) whose keyword is contained
    /// in it as a contiguous substring. Pure and deterministic; `NoMatch` is
    /// an expected outcome, not an error.
    pub fn evaluate(&self, query: &str) -> MatchResult<&O> {
        let lowered = query.to_lowercase();
        self.rules
            .iter()
            .find(|rule| lowered.contains(rule.keyword.as_str()))
            .map_or(MatchResult::NoMatch, |rule| {
                MatchResult::Matched(&rule.outcome)
            })
    }
}

// ─── MatchResult ──────────────────────────────────────────────────────────────

/// Outcome of applying a rule table to a query. There is no partial or
/// fuzzy kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult<T> {
    Matched(T),
    NoMatch,
}

impl<T> MatchResult<T> {
    pub fn matched(self) -> Option<T> {
        match self {
            Self::Matched(outcome) => Some(outcome),
            Self::NoMatch => None,
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, Self::Matched(_))
    }
}

// ─── Boundary validation ──────────────────────────────────────────────────────

/// Extracts a query string from an untyped collaborator payload.
///
/// An absent field is treated as the empty query; a present but non-string
/// value is a caller contract violation and is rejected before any
/// normalization happens, never coerced to "".
pub fn query_from_json<'a>(
    payload: &'a serde_json::Value,
    field: &str,
) -> Result<&'a str, EngineError> {
    match payload.get(field) {
        None => Ok(""),
        Some(serde_json::Value::String(s)) => Ok(s),
        Some(other) => Err(EngineError::NotText {
            got: json_type_name(other),
        }),
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
