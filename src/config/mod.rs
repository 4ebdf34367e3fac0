//! Crate configuration module
//!
//! Holds pagination defaults and the stable event codes.

mod constants;

pub use constants::*;
