//! storekit - Generic CRUD repository foundation for SeaORM services
//!
//! This crate provides the persistence glue an application inherits per
//! entity type: create, read (by id, paged list, count, existence), update
//! with optimistic-concurrency conflict detection, and soft/hard delete,
//! parameterized over an entity, optional distinct create/update DTOs, and
//! a pagination model.
//!
//! # Modules
//!
//! - **config**: pagination defaults and stable event codes
//! - **types**: shared types (outcomes, violations, pagination)
//! - **infra**: infrastructure concerns (connection handle, store traits)
//! - **errors**: centralized error handling
//!
//! # Usage
//!
//! Implement [`ReadStore`], [`WriteStore`] and [`DeleteStore`] for a
//! per-entity store struct holding a [`sea_orm::DatabaseConnection`];
//! the provided method bodies supply the CRUD surface and [`CrudStore`]
//! is implemented automatically. Override `restriction` to scope visible
//! rows, the validation hooks to reject inputs, `concurrency_guard` to
//! check a version token, and `mark_deleted`/`mark_restored` for
//! soft-deletable entities.

pub mod config;
pub mod errors;
pub mod infra;
pub mod types;

// Re-export commonly used types at crate root
pub use errors::{StoreError, StoreResult};
pub use infra::{CrudStore, DeleteStore, ReadStore, Store, WriteStore};
pub use types::{Outcome, Page, RuleViolation, Search};
