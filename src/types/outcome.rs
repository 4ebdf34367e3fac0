//! Mutation outcome types.
//!
//! Every mutating store call resolves to an [`Outcome`] so that callers
//! branch on the outcome kind instead of catching errors. Only programming
//! errors and unanticipated persistence faults surface as
//! [`StoreError`](crate::errors::StoreError).

use serde::Serialize;

use crate::config::{EVENT_CONCURRENCY_CONFLICT, EVENT_VALIDATION_FAILED};

/// Structured error carried by a rejected mutation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleViolation {
    /// Stable numeric event code
    pub code: u32,
    /// Human-readable description
    pub message: String,
}

impl RuleViolation {
    /// Create a violation with an explicit code
    pub fn new(code: u32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Violation reported when an update loses an optimistic concurrency race
    pub fn concurrency() -> Self {
        Self::new(
            EVENT_CONCURRENCY_CONFLICT,
            "row version changed since it was read",
        )
    }

    /// Flatten `validator` output into coded violations, one per failed rule
    pub fn from_validation(errors: &validator::ValidationErrors) -> Vec<Self> {
        errors
            .field_errors()
            .iter()
            .flat_map(|(field, failures)| {
                failures.iter().map(move |failure| {
                    let detail = failure
                        .message
                        .as_ref()
                        .map(|message| message.to_string())
                        .unwrap_or_else(|| failure.code.to_string());
                    Self::new(EVENT_VALIDATION_FAILED, format!("{field}: {detail}"))
                })
            })
            .collect()
    }
}

/// Tagged result of a mutating store call
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<M> {
    /// The flush went through; carries the persisted model where the
    /// operation produces one
    Ok(M),
    /// Rejected by a validation hook or by the optimistic concurrency check
    Conflict(Vec<RuleViolation>),
    /// No row with the requested identity is visible
    NotFound,
}

impl<M> Outcome<M> {
    /// True when the mutation went through
    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok(_))
    }

    /// The persisted model, if the mutation went through
    pub fn ok(self) -> Option<M> {
        match self {
            Outcome::Ok(model) => Some(model),
            _ => None,
        }
    }

    /// Violations carried by a conflict; empty for other outcomes
    pub fn violations(&self) -> &[RuleViolation] {
        match self {
            Outcome::Conflict(violations) => violations,
            _ => &[],
        }
    }
}
