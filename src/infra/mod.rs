//! Infrastructure layer - External systems integration
//!
//! This module handles the persistence concerns:
//! - Database connection handle and its lifecycle
//! - Generic CRUD store traits

pub mod db;
pub mod repositories;

pub use db::Store;
pub use repositories::{CrudStore, DeleteStore, ReadStore, WriteStore};
