//! Centralized error handling.
//!
//! Faults the facade has no recovery strategy for. Expected, caller-actionable
//! outcomes (not found, validation rejection, concurrency conflict) are never
//! errors: they are returned as [`Outcome`](crate::types::Outcome) values and
//! callers branch on the outcome kind.

use thiserror::Error;

/// Unrecoverable store faults
#[derive(Error, Debug)]
pub enum StoreError {
    /// Unanticipated persistence fault; logged before propagation
    #[error("database error")]
    Database(#[from] sea_orm::DbErr),

    /// The store handle was used after `close`
    #[error("store is closed")]
    Closed,
}

/// Result type alias
pub type StoreResult<T> = Result<T, StoreError>;
