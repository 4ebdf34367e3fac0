//! Store layer - Data access abstraction
//!
//! Generic CRUD stores provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

mod base;

pub use base::{CrudStore, DeleteStore, ReadStore, WriteStore};
